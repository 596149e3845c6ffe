//! Packaging service errors.

use packwise::{packs::PackSizesError, solvers::PackingError};
use thiserror::Error;
use tokio::task::JoinError;

use crate::domain::packs::PacksServiceError;

#[derive(Debug, Error)]
pub enum PackagingServiceError {
    #[error("no packs configured")]
    NoPacksConfigured,

    #[error("failed to load pack sizes")]
    Packs(#[source] PacksServiceError),

    #[error("stored pack sizes are invalid")]
    InvalidPackSizes(#[from] PackSizesError),

    #[error("failed to compute shipment")]
    Packing(#[source] PackingError),

    #[error("packing task failed")]
    Task(#[from] JoinError),
}

impl From<PacksServiceError> for PackagingServiceError {
    fn from(error: PacksServiceError) -> Self {
        Self::Packs(error)
    }
}

impl From<PackingError> for PackagingServiceError {
    fn from(error: PackingError) -> Self {
        match error {
            PackingError::NoPacksConfigured => Self::NoPacksConfigured,
            error => Self::Packing(error),
        }
    }
}
