//! Packaging

pub mod errors;
pub mod service;

pub use errors::PackagingServiceError;
pub use service::*;
