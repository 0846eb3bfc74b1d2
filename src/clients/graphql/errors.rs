//! GraphQL-specific error types.
//!
//! The Admin API reports two kinds of failure inside an HTTP 200 response:
//! top-level `errors` (malformed query, throttling, access denied) and
//! per-mutation `userErrors`. The client turns the first kind into
//! [`GraphqlError::Query`]; `userErrors` are data and belong to the caller.

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for GraphQL API operations.
///
/// # Example
///
/// ```rust
/// use draft_order_admin::clients::graphql::GraphqlError;
/// use draft_order_admin::clients::{HttpError, HttpResponseError};
///
/// let http_error = HttpError::Response(HttpResponseError {
///     code: 401,
///     message: r#"{"errors":"Unauthorized"}"#.to_string(),
///     error_reference: None,
/// });
/// let graphql_error: GraphqlError = http_error.into();
/// assert!(graphql_error.to_string().contains("Unauthorized"));
/// ```
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// An HTTP-level error occurred (network, non-2xx, invalid request).
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response carried a non-empty top-level `errors` array.
    #[error("GraphQL operation {operation} failed: {}", .messages.join("; "))]
    Query {
        /// The operation name.
        operation: String,
        /// The `message` of every reported error.
        messages: Vec<String>,
    },

    /// The response did not contain the expected field.
    #[error("GraphQL operation {operation} returned no '{path}'")]
    UnexpectedResponse {
        /// The operation name.
        operation: String,
        /// The missing JSON path.
        path: &'static str,
    },

    /// The `data` payload did not match the expected shape.
    #[error("GraphQL operation {operation} returned malformed data: {source}")]
    Decode {
        /// The operation name.
        operation: String,
        /// The underlying deserialization error.
        source: serde_json::Error,
    },
}
