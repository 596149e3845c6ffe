//! Packs

pub mod errors;
pub mod records;
mod repository;
pub mod service;

pub use errors::PacksServiceError;
pub use service::*;
