//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        packaging::{DefaultPackagingService, PackagingService},
        packs::{PacksService, PgPacksService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to run database migrations")]
    Migrate(#[source] MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub packs: Arc<dyn PacksService>,
    pub packaging: Arc<dyn PackagingService>,
}

impl AppContext {
    /// Wire the services around a pack size source.
    #[must_use]
    pub fn new(packs: Arc<dyn PacksService>) -> Self {
        Self {
            packaging: Arc::new(DefaultPackagingService::new(Arc::clone(&packs))),
            packs,
        }
    }

    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or migrating fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrate)?;

        Ok(Self::new(Arc::new(PgPacksService::new(Db::new(pool)))))
    }
}
