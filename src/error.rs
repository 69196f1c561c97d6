//! Error types shared across the application.
//!
//! Fetch and decode failures are carried per dataset so one broken upstream
//! degrades its own column instead of failing the page. `AppError` covers
//! handler-level failures and converts to an HTTP response, enabling the `?`
//! operator in controllers.

use thiserror::Error;

/// Failure of a single upstream request.
///
/// One of these occupies the failing endpoint's slot in the fetch outcome
/// sequence; the other slots are unaffected.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, connect, I/O).
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The upstream answered with a non-success status.
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    /// The body could not be parsed as JSON.
    #[error("{url} returned a non-JSON body: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// The upstream body parsed as JSON but did not have the expected top-level
/// shape for its dataset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Expected `{ "results": [...] }` (the nested shape).
    #[error("{label}: expected an object with a `results` array, got {found}")]
    MissingResults {
        label: &'static str,
        found: &'static str,
    },

    /// Expected a bare top-level array (the flat shape).
    #[error("{label}: expected a top-level array, got {found}")]
    NotAnArray {
        label: &'static str,
        found: &'static str,
    },
}

/// Handler-level error with an HTTP status code.
///
/// Converts to `HttpResponse` (see `http::response`), so controllers can
/// early-return with `?` or `.into()`.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    message: String,
    status_code: u16,
}

impl AppError {
    /// Create a new error with status 500.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: 500,
        }
    }

    /// Set the HTTP status code.
    pub fn status(mut self, code: u16) -> Self {
        self.status_code = code;
        self
    }

    /// Create a 404 Not Found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(message).status(404)
    }

    /// Create a 400 Bad Request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(message).status(400)
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_defaults_to_500() {
        let err = AppError::new("boom");
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.message(), "boom");
    }

    #[test]
    fn not_found_sets_404() {
        assert_eq!(AppError::not_found("missing").status_code(), 404);
    }

    #[test]
    fn decode_error_display_names_the_dataset() {
        let err = DecodeError::MissingResults {
            label: "Swapi Data",
            found: "array",
        };
        assert_eq!(
            err.to_string(),
            "Swapi Data: expected an object with a `results` array, got array"
        );
    }
}
