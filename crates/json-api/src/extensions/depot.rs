//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn missing_value_is_a_500() {
        let depot = Depot::new();

        let result = depot.obtain_or_500::<Arc<String>>();

        assert_eq!(
            result.err().map(|error| error.code),
            Some(StatusCode::INTERNAL_SERVER_ERROR)
        );
    }

    #[test]
    fn injected_value_is_returned() {
        let mut depot = Depot::new();

        depot.inject(Arc::new("state".to_owned()));

        let result = depot.obtain_or_500::<Arc<String>>().map(|value| value.as_str());

        assert_eq!(result.ok(), Some("state"));
    }
}
