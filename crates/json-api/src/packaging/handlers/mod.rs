//! Packaging Handlers

pub(crate) mod create;
