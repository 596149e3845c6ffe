//! Sync Packs Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use packwise::packs::PackSizes;

use crate::{extensions::*, packs::errors::into_status_error, state::State};

/// Sync Packs Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SyncPacksRequest {
    /// Pack sizes to keep; every other size is removed
    pub packs: Vec<u64>,
}

/// Sync Packs Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SyncPacksResponse {
    pub status: String,
}

/// Sync Packs Handler
///
/// Replaces the configured pack sizes. An empty list removes every pack.
#[endpoint(
    tags("packs"),
    summary = "Sync Pack Sizes",
    responses(
        (status_code = StatusCode::OK, description = "Pack sizes replaced"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<SyncPacksRequest>,
    depot: &mut Depot,
) -> Result<Json<SyncPacksResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let sizes = json.into_inner().packs;

    if let Err(error) = PackSizes::new(sizes.iter().copied()) {
        return Err(StatusError::bad_request().brief(error.to_string()));
    }

    let count = sizes.len();

    state
        .app
        .packs
        .sync_packs(sizes)
        .await
        .map_err(into_status_error)?;

    info!(count, "pack sizes synced");

    Ok(Json(SyncPacksResponse {
        status: "OK".to_string(),
    }))
}
