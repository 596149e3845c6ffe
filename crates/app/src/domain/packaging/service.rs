//! Packaging service.
//!
//! Computes which packs to ship for an order against the currently configured
//! pack sizes.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use packwise::prelude::*;
use tokio::task;
use tracing::info;

use crate::domain::{packaging::errors::PackagingServiceError, packs::PacksService};

pub struct DefaultPackagingService {
    packs: Arc<dyn PacksService>,
}

impl DefaultPackagingService {
    #[must_use]
    pub fn new(packs: Arc<dyn PacksService>) -> Self {
        Self { packs }
    }
}

#[async_trait]
impl PackagingService for DefaultPackagingService {
    #[tracing::instrument(
        name = "packaging.service.pack_items",
        skip(self),
        err
    )]
    async fn pack_items(&self, number_of_items: u64) -> Result<ShipmentPlan, PackagingServiceError> {
        let sizes = PackSizes::new(self.packs.list_pack_sizes().await?)?;

        if sizes.is_empty() {
            return Err(PackagingServiceError::NoPacksConfigured);
        }

        // The residual table grows with the largest pack size, so keep it off the
        // async workers.
        let plan = task::spawn_blocking(move || compute_shipment(number_of_items, &sizes)).await??;

        info!(
            number_of_items,
            total_items = plan.total_items(),
            surplus = plan.surplus(number_of_items),
            pack_count = plan.pack_count(),
            "packed items"
        );

        Ok(plan)
    }
}

#[automock]
#[async_trait]
pub trait PackagingService: Send + Sync {
    /// Chooses the packs to ship for an order of `number_of_items` items.
    async fn pack_items(&self, number_of_items: u64) -> Result<ShipmentPlan, PackagingServiceError>;
}
