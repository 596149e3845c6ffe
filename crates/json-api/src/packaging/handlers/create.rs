//! Package Items Handler

use std::{collections::BTreeMap, sync::Arc};

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use packwise::shipment::ShipmentPlan;

use crate::{
    extensions::*, observability::observe_shipment, packaging::errors::into_status_error,
    state::State,
};

/// Package Items Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PackageRequest {
    /// Number of items ordered, at least one
    pub number_of_items: u64,
}

/// Package Items Response
///
/// Pack size mapped to the number of packs of that size.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub(crate) struct PackageResponse(pub BTreeMap<u64, u64>);

impl From<ShipmentPlan> for PackageResponse {
    fn from(plan: ShipmentPlan) -> Self {
        Self(plan.into_inner())
    }
}

/// Package Items Handler
///
/// Chooses which packs to ship for an order.
#[endpoint(
    tags("packaging"),
    summary = "Package Items",
    responses(
        (status_code = StatusCode::OK, description = "Packs to ship"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request or no packs configured"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<PackageRequest>,
    depot: &mut Depot,
) -> Result<Json<PackageResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let number_of_items = json.into_inner().number_of_items;

    if number_of_items == 0 {
        return Err(StatusError::bad_request().brief("numberOfItems must be at least 1"));
    }

    let plan = state
        .app
        .packaging
        .pack_items(number_of_items)
        .await
        .map_err(into_status_error)?;

    observe_shipment(number_of_items, &plan);

    Ok(Json(plan.into()))
}
