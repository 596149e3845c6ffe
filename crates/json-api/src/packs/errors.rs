//! Pack Errors

use salvo::http::StatusError;
use tracing::error;

use packwise_app::domain::packs::PacksServiceError;

pub(crate) fn into_status_error(error: PacksServiceError) -> StatusError {
    match error {
        PacksServiceError::InvalidPackSizes(source) => {
            StatusError::bad_request().brief(source.to_string())
        }
        PacksServiceError::InvalidSize(_) | PacksServiceError::InvalidData => {
            StatusError::bad_request().brief("pack size out of range")
        }
        PacksServiceError::AlreadyExists
        | PacksServiceError::NotFound
        | PacksServiceError::InvalidReference
        | PacksServiceError::MissingRequiredData => {
            error!("failed to sync packs: {error}");

            StatusError::internal_server_error().brief("failed to sync packs")
        }
        PacksServiceError::Sql(source) => {
            error!("failed to sync packs: {source}");

            StatusError::internal_server_error().brief("failed to sync packs")
        }
    }
}
