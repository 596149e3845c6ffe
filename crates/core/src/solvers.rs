//! Solvers for Pack Quantities

use std::collections::TryReserveError;

use thiserror::Error;

use crate::{
    packs::{PackSize, PackSizes},
    shipment::ShipmentPlan,
};

pub mod residual;

/// Solver Errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackingError {
    /// There are no pack sizes to choose from.
    #[error("no packs configured")]
    NoPacksConfigured,

    /// The search window for this order does not fit in memory addressing.
    #[error("order of {quantity} items cannot be searched with largest pack size {largest}")]
    Overflow {
        /// Ordered quantity
        quantity: u64,

        /// Largest configured pack size
        largest: PackSize,
    },

    /// The search table for this order could not be allocated.
    #[error("search table of {totals} totals could not be allocated")]
    Allocation {
        /// Number of totals the table needed
        totals: usize,

        /// Allocator failure
        #[source]
        source: TryReserveError,
    },

    /// Internal solver invariant was violated (this is a bug).
    #[error("solver invariant violated: {message}")]
    InvariantViolation {
        /// What invariant was violated
        message: &'static str,
    },
}

/// Trait for choosing which packs to ship for an order
pub trait Solver {
    /// Choose packs covering `quantity` items from the given sizes.
    ///
    /// # Errors
    ///
    /// Returns a [`PackingError`] if no sizes are configured or the solver fails.
    fn solve(quantity: u64, sizes: &PackSizes) -> Result<ShipmentPlan, PackingError>;
}

/// Compute the shipment for an order with the default solver.
///
/// # Errors
///
/// Returns [`PackingError::NoPacksConfigured`] when `sizes` is empty.
pub fn compute_shipment(quantity: u64, sizes: &PackSizes) -> Result<ShipmentPlan, PackingError> {
    residual::ResidualSearchSolver::solve(quantity, sizes)
}
