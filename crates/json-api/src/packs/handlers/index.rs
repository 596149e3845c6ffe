//! Pack Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{extensions::*, state::State};

/// Pack Index Handler
///
/// Returns every configured pack size, smallest first.
#[endpoint(
    tags("packs"),
    summary = "List Pack Sizes",
    responses(
        (status_code = StatusCode::OK, description = "Configured pack sizes, ascending"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<u64>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let sizes = state
        .app
        .packs
        .list_pack_sizes()
        .await
        .or_500("failed to get packs")?;

    Ok(Json(sizes))
}
