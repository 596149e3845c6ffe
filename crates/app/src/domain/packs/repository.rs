//! Packs Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::domain::packs::records::PackRecord;

const LIST_PACKS_SQL: &str = include_str!("sql/list_packs.sql");
const LIST_PACK_SIZES_SQL: &str = include_str!("sql/list_pack_sizes.sql");
const DELETE_ALL_PACKS_SQL: &str = include_str!("sql/delete_all_packs.sql");
const DELETE_PACKS_NOT_IN_SQL: &str = include_str!("sql/delete_packs_not_in.sql");
const INSERT_PACKS_SQL: &str = include_str!("sql/insert_packs.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgPacksRepository;

impl PgPacksRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_packs(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<PackRecord>, sqlx::Error> {
        query_as::<Postgres, PackRecord>(LIST_PACKS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_pack_sizes(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<u64>, sqlx::Error> {
        let sizes: Vec<i64> = query_scalar(LIST_PACK_SIZES_SQL)
            .fetch_all(&mut **tx)
            .await?;

        sizes.into_iter().map(decode_size).collect()
    }

    pub(crate) async fn delete_all_packs(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_ALL_PACKS_SQL)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    /// Delete every pack whose size is not listed.
    pub(crate) async fn delete_packs_not_in(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        sizes: &[i64],
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PACKS_NOT_IN_SQL)
            .bind(sizes)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    /// Insert the listed sizes, leaving existing rows untouched.
    pub(crate) async fn insert_packs(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        sizes: &[i64],
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(INSERT_PACKS_SQL)
            .bind(sizes)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

fn decode_size(size: i64) -> Result<u64, sqlx::Error> {
    u64::try_from(size).map_err(|e| sqlx::Error::ColumnDecode {
        index: "size".to_string(),
        source: Box::new(e),
    })
}

impl<'r> FromRow<'r, PgRow> for PackRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            size: decode_size(row.try_get("size")?)?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
