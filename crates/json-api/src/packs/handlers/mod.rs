//! Pack Handlers

pub(crate) mod index;
pub(crate) mod sync;
