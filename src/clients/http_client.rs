//! HTTP client for Admin API communication.
//!
//! [`HttpClient`] owns the connection pool, the base URI and the
//! authentication headers. Every request is attempted exactly once.

use std::collections::HashMap;

use crate::auth::Session;
use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::{AdminConfig, HostUrl};

/// Crate version from Cargo.toml, reported in the User-Agent.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client bound to one shop.
///
/// # Example
///
/// ```rust
/// use draft_order_admin::clients::HttpClient;
/// use draft_order_admin::{AccessToken, Session, ShopDomain};
///
/// let session = Session::offline(
///     ShopDomain::new("print-shop").unwrap(),
///     AccessToken::new("shpat_123").unwrap(),
/// );
/// let client = HttpClient::new("/admin/api/2025-10", &session, None);
///
/// assert_eq!(client.base_uri(), "https://print-shop.myshopify.com");
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    /// Scheme and authority, e.g. `https://my-store.myshopify.com`.
    base_uri: String,
    /// Path prefix, e.g. `/admin/api/2025-10`.
    base_path: String,
    default_headers: HashMap<String, String>,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given session.
    ///
    /// When `config` carries an `api_host`, requests go to that origin and a
    /// `Host` header naming the shop is added, so a forwarding proxy can route
    /// them.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created, which only
    /// happens when TLS initialization fails.
    #[must_use]
    pub fn new(
        base_path: impl Into<String>,
        session: &Session,
        config: Option<&AdminConfig>,
    ) -> Self {
        let api_host = config.and_then(AdminConfig::api_host);
        let base_uri = api_host.map_or_else(
            || format!("https://{}", session.shop.as_ref()),
            |host| HostUrl::origin(host).to_string(),
        );

        let user_agent_prefix = config
            .and_then(AdminConfig::user_agent_prefix)
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Draft Order Admin v{APP_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        if api_host.is_some() {
            default_headers.insert("Host".to_string(), session.shop.as_ref().to_string());
        }
        default_headers.insert(
            "X-Shopify-Access-Token".to_string(),
            session.access_token.as_ref().to_string(),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_uri,
            base_path: base_path.into(),
            default_headers,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a request and parses the response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if validation fails,
    /// [`HttpError::Network`] on transport failure, and
    /// [`HttpError::Response`] for any non-2xx status.
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}{}/{}", self.base_uri, self.base_path, request.path);

        let mut builder = self
            .client
            .post(&url)
            .header("Content-Type", "application/json");
        for (key, value) in &self.default_headers {
            builder = builder.header(key, value);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.to_string());
        }

        let res = builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;
        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text).unwrap_or_else(|_| {
                if code >= 500 {
                    serde_json::json!({ "raw_body": body_text })
                } else {
                    serde_json::json!({})
                }
            })
        };

        let response = HttpResponse::new(code, res_headers, body);

        if let Some(reason) = response.deprecation_reason() {
            tracing::warn!(
                path = %request.path,
                reason,
                "Deprecated request to the Shopify Admin API"
            );
        }

        if response.is_ok() {
            return Ok(response);
        }

        Err(HttpError::Response(HttpResponseError {
            code,
            message: Self::serialize_error(&response),
            error_reference: response.request_id().map(String::from),
        }))
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let value = value.to_str().unwrap_or_default().to_string();
            result
                .entry(name.as_str().to_lowercase())
                .or_default()
                .push(value);
        }
        result
    }

    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        for key in ["errors", "error", "error_description", "raw_body"] {
            if let Some(value) = response.body.get(key) {
                error_body.insert(key.to_string(), value.clone());
            }
        }
        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}
