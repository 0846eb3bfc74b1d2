//! GraphQL client for the Shopify Admin API.

use serde::de::DeserializeOwned;

use crate::auth::Session;
use crate::clients::graphql::GraphqlError;
use crate::clients::{HttpClient, HttpRequest, HttpResponse};
use crate::config::{AdminConfig, ApiVersion};

/// GraphQL client bound to one shop and one API version.
///
/// [`query`](Self::query) returns the raw response; [`execute`](Self::execute)
/// also checks top-level `errors` and decodes `data` into a typed value.
///
/// # Example
///
/// ```rust,ignore
/// use draft_order_admin::{GraphqlClient, Session};
/// use serde_json::json;
///
/// let client = GraphqlClient::new(&session, Some(&config));
///
/// let response = client
///     .query("query { shop { name } }", None)
///     .await?;
/// println!("Shop: {}", response.body["data"]["shop"]["name"]);
/// ```
#[derive(Debug)]
pub struct GraphqlClient {
    http_client: HttpClient,
    api_version: ApiVersion,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Creates a client using the configured API version, or the latest
    /// stable one when no configuration is given.
    #[must_use]
    pub fn new(session: &Session, config: Option<&AdminConfig>) -> Self {
        let api_version = config.map_or_else(ApiVersion::latest, |c| c.api_version().clone());
        let http_client = HttpClient::new(format!("/admin/api/{api_version}"), session, config);

        tracing::debug!(
            session = %session.id,
            shop = %session.shop,
            api_version = %api_version,
            "Created Admin API GraphQL client"
        );

        Self {
            http_client,
            api_version,
        }
    }

    /// Returns the API version being used by this client.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sends a query to `graphql.json` and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Http`] for HTTP-level errors. GraphQL-level
    /// errors arrive with status 200 and are left in `response.body["errors"]`.
    pub async fn query(
        &self,
        query: &str,
        variables: Option<serde_json::Value>,
    ) -> Result<HttpResponse, GraphqlError> {
        let body = serde_json::json!({
            "query": query,
            "variables": variables
        });

        let request = HttpRequest::builder("graphql.json")
            .body(body)
            .build()
            .map_err(|e| GraphqlError::Http(e.into()))?;
        self.http_client.request(request).await.map_err(Into::into)
    }

    /// Runs a named operation and decodes its `data` payload.
    ///
    /// # Errors
    ///
    /// - [`GraphqlError::Http`] for HTTP-level failures
    /// - [`GraphqlError::Query`] when the response has top-level `errors`
    /// - [`GraphqlError::UnexpectedResponse`] when `data` is missing or null
    /// - [`GraphqlError::Decode`] when `data` does not deserialize into `T`
    pub async fn execute<T: DeserializeOwned>(
        &self,
        operation: &str,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T, GraphqlError> {
        tracing::debug!(operation, "Sending GraphQL operation");
        let response = self.query(query, Some(variables)).await?;
        decode_data(operation, response.body)
    }
}

fn decode_data<T: DeserializeOwned>(
    operation: &str,
    mut body: serde_json::Value,
) -> Result<T, GraphqlError> {
    let messages: Vec<String> = body
        .get("errors")
        .and_then(serde_json::Value::as_array)
        .map(|errors| {
            errors
                .iter()
                .map(|error| {
                    error
                        .get("message")
                        .and_then(serde_json::Value::as_str)
                        .map_or_else(|| error.to_string(), String::from)
                })
                .collect()
        })
        .unwrap_or_default();
    if !messages.is_empty() {
        return Err(GraphqlError::Query {
            operation: operation.to_string(),
            messages,
        });
    }

    let data = body
        .get_mut("data")
        .map(serde_json::Value::take)
        .filter(|data| !data.is_null())
        .ok_or_else(|| GraphqlError::UnexpectedResponse {
            operation: operation.to_string(),
            path: "data",
        })?;

    serde_json::from_value(data).map_err(|source| GraphqlError::Decode {
        operation: operation.to_string(),
        source,
    })
}
