//! HTTP-level error types.
//!
//! - [`HttpResponseError`]: a non-2xx response from the Admin API
//! - [`InvalidHttpRequestError`]: a request that failed validation before sending
//! - [`HttpError`]: the union of the above plus transport failures
//!
//! Requests are attempted exactly once; there is no retry error variant.

use thiserror::Error;

/// Error returned when the Admin API answers with a non-2xx status.
///
/// `message` is a compact JSON object built from the response's `errors`,
/// `error` and `error_description` fields, plus an `error_reference` naming
/// the `X-Request-Id` to quote when reporting the failure.
///
/// # Example
///
/// ```rust
/// use draft_order_admin::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 401,
///     message: r#"{"errors":"[API] Invalid API key or access token"}"#.to_string(),
///     error_reference: Some("req-1".to_string()),
/// };
/// assert!(error.to_string().contains("Invalid API key"));
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message in JSON format.
    pub message: String,
    /// Value of the `X-Request-Id` response header, if any.
    pub error_reference: Option<String>,
}

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST request was made without a body.
    #[error("Cannot POST to {path} without specifying data.")]
    MissingBody {
        /// The request path.
        path: String,
    },
}

/// Unified error type for HTTP operations.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-2xx response.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code if the server answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::InvalidRequest(_) | Self::Network(_) => None,
        }
    }
}
