//! Route labels for request spans and metrics.

/// Routes served by this API. Anything else is grouped under one label so
/// arbitrary paths cannot grow metric cardinality.
const ROUTES: [&str; 5] = [
    "/api/package",
    "/api/packs",
    "/healthcheck",
    "/api-doc/openapi.json",
    "/docs",
];

const UNMATCHED_ROUTE: &str = "unmatched";

pub(super) fn route_label(path: &str) -> &'static str {
    let path = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };

    ROUTES
        .iter()
        .copied()
        .find(|route| {
            path == *route
                || (*route == "/docs"
                    && path
                        .strip_prefix(route)
                        .is_some_and(|rest| rest.starts_with('/')))
        })
        .unwrap_or(UNMATCHED_ROUTE)
}
