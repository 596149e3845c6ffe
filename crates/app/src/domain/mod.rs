//! Packwise Domain Concerns

pub mod packaging;
pub mod packs;
