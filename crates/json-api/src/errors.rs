//! JSON error bodies
//!
//! Every client or server error leaves the service as `{"error": "<message>"}`, where the
//! message is the brief of the [`StatusError`] a handler or extractor produced.

use salvo::{catcher::Catcher, http::ResBody, oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

/// Error Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorResponse {
    /// What went wrong
    pub error: String,
}

/// Service catcher that renders errors as [`ErrorResponse`] bodies.
pub(crate) fn catcher() -> Catcher {
    Catcher::default().hoop(render_error)
}

#[handler]
async fn render_error(res: &mut Response, ctrl: &mut FlowCtrl) {
    let code = res
        .status_code
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let error = match res.take_body() {
        ResBody::Error(status_error) if !status_error.brief.is_empty() => status_error.brief,
        ResBody::Error(status_error) => status_error.name,
        _ => code.canonical_reason().unwrap_or("Error").to_owned(),
    };

    res.status_code(code);
    res.render(Json(ErrorResponse { error }));

    ctrl.skip_rest();
}
