//! Packwise
//!
//! Packwise works out how many packs of each configured size to ship for an order,
//! shipping whole packs only, as few surplus items as possible and, among those,
//! as few packs as possible.

pub mod packs;
pub mod prelude;
pub mod shipment;
pub mod solvers;
