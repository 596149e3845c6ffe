//! Packwise prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    packs::{MAX_PACK_SIZE, PackSize, PackSizes, PackSizesError},
    shipment::ShipmentPlan,
    solvers::{
        PackingError, Solver, compute_shipment,
        residual::{LARGE_ORDER_BUFFER, Reduction, ResidualSearchSolver},
    },
};
