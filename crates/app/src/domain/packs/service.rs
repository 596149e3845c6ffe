//! Packs service.

use async_trait::async_trait;
use mockall::automock;
use packwise::packs::PackSizes;
use tracing::info;

use crate::{
    database::Db,
    domain::packs::{
        errors::PacksServiceError, records::PackRecord, repository::PgPacksRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgPacksService {
    db: Db,
    repository: PgPacksRepository,
}

impl PgPacksService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgPacksRepository::new(),
        }
    }
}

#[async_trait]
impl PacksService for PgPacksService {
    async fn list_pack_sizes(&self) -> Result<Vec<u64>, PacksServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let sizes = self.repository.list_pack_sizes(&mut tx).await?;

        tx.commit().await?;

        Ok(sizes)
    }

    async fn list_packs(&self) -> Result<Vec<PackRecord>, PacksServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let packs = self.repository.list_packs(&mut tx).await?;

        tx.commit().await?;

        Ok(packs)
    }

    #[tracing::instrument(
        name = "packs.service.sync_packs",
        skip(self, sizes),
        fields(requested = sizes.len()),
        err
    )]
    async fn sync_packs(&self, sizes: Vec<u64>) -> Result<(), PacksServiceError> {
        let sizes = PackSizes::new(sizes)?;

        let rows = sizes
            .iter()
            .map(i64::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut tx = self.db.begin_transaction().await?;

        let (deleted, inserted) = if rows.is_empty() {
            (self.repository.delete_all_packs(&mut tx).await?, 0)
        } else {
            let deleted = self.repository.delete_packs_not_in(&mut tx, &rows).await?;
            let inserted = self.repository.insert_packs(&mut tx, &rows).await?;

            (deleted, inserted)
        };

        tx.commit().await?;

        info!(sizes = rows.len(), deleted, inserted, "synced packs");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait PacksService: Send + Sync {
    /// Retrieves every configured pack size, smallest first.
    async fn list_pack_sizes(&self) -> Result<Vec<u64>, PacksServiceError>;

    /// Retrieves every configured pack, smallest first.
    async fn list_packs(&self) -> Result<Vec<PackRecord>, PacksServiceError>;

    /// Replaces the configured pack sizes with the given set.
    ///
    /// Duplicates are ignored and an empty set removes every pack. Sizes that
    /// were already configured keep their original creation time.
    async fn sync_packs(&self, sizes: Vec<u64>) -> Result<(), PacksServiceError>;
}
