//! Cross-origin request policy

use std::time::Duration;

use salvo::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, Cors, CorsHandler, ExposeHeaders},
    http::{Method, header},
};

/// Preflight responses may be cached for twelve hours.
const MAX_AGE: Duration = Duration::from_secs(12 * 60 * 60);

/// Permissive policy for browser clients on any origin.
///
/// Credentials are never allowed, since a wildcard origin cannot be combined with them.
pub(crate) fn handler() -> CorsHandler {
    Cors::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ]))
        .expose_headers(ExposeHeaders::list([header::CONTENT_LENGTH]))
        .max_age(MAX_AGE)
        .into_handler()
}
