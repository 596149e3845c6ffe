//! Packaging Errors

use salvo::http::StatusError;
use tracing::error;

use packwise::solvers::PackingError;
use packwise_app::domain::packaging::PackagingServiceError;

const PACKING_FAILED: &str = "failed to pack items";

pub(crate) fn into_status_error(error: PackagingServiceError) -> StatusError {
    match error {
        PackagingServiceError::NoPacksConfigured => {
            StatusError::bad_request().brief(error.to_string())
        }
        PackagingServiceError::Packing(source @ PackingError::InvariantViolation { .. }) => {
            error!(%source, "packing solver invariant violated");

            StatusError::internal_server_error().brief(PACKING_FAILED)
        }
        PackagingServiceError::Packs(_)
        | PackagingServiceError::InvalidPackSizes(_)
        | PackagingServiceError::Packing(_)
        | PackagingServiceError::Task(_) => {
            error!("{PACKING_FAILED}: {error}");

            StatusError::internal_server_error().brief(PACKING_FAILED)
        }
    }
}
