//! HTTP request types.

use crate::clients::errors::InvalidHttpRequestError;

/// A JSON `POST` relative to an [`HttpClient`](crate::clients::HttpClient)'s base path.
///
/// The Admin GraphQL endpoint takes nothing else, so the method and content
/// type are fixed.
///
/// # Example
///
/// ```rust
/// use draft_order_admin::clients::HttpRequest;
/// use serde_json::json;
///
/// let request = HttpRequest::builder("graphql.json")
///     .body(json!({ "query": "{ shop { name } }" }))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.path, "graphql.json");
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The path (relative to base path) for this request.
    pub path: String,
    /// The JSON request body.
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder {
            path: path.into(),
            body: None,
        }
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingBody`] if there is no body.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                path: self.path.clone(),
            });
        }
        Ok(())
    }
}

/// Builder for [`HttpRequest`].
#[derive(Debug)]
pub struct HttpRequestBuilder {
    path: String,
    body: Option<serde_json::Value>,
}

impl HttpRequestBuilder {
    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Builds and validates the [`HttpRequest`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            path: self.path,
            body: self.body,
        };
        request.verify()?;
        Ok(request)
    }
}
