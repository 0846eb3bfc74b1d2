//! Integration tests for the Admin API GraphQL client.
//!
//! A `wiremock` server stands in for the shop; the client is pointed at it
//! through `api_host`.

use draft_order_admin::clients::HttpError;
use draft_order_admin::{
    AccessToken, AdminConfig, AdminConfigBuilder, ApiVersion, GraphqlClient, GraphqlError, HostUrl,
    Session, ShopDomain,
};
use serde::Deserialize;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_client(server: &MockServer, version: ApiVersion) -> GraphqlClient {
    let config = AdminConfig::builder()
        .shop(ShopDomain::new("test-shop").unwrap())
        .access_token(AccessToken::new("test-token").unwrap())
        .api_version(version)
        .api_host(HostUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    GraphqlClient::new(&Session::from_config(&config), Some(&config))
}

#[derive(Debug, Deserialize)]
struct ShopData {
    shop: Shop,
}

#[derive(Debug, Deserialize)]
struct Shop {
    name: String,
}

#[tokio::test]
async fn test_execute_posts_to_versioned_endpoint_with_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/api/2025-04/graphql.json"))
        .and(header("X-Shopify-Access-Token", "test-token"))
        .and(header("Content-Type", "application/json"))
        .and(body_partial_json(json!({ "variables": { "first": 1 } })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": { "shop": { "name": "Print Shop" } } })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, ApiVersion::V2025_04);
    let data: ShopData = client
        .execute("Shop", "query Shop { shop { name } }", json!({ "first": 1 }))
        .await
        .unwrap();

    assert_eq!(data.shop.name, "Print Shop");
}

#[tokio::test]
async fn test_top_level_errors_become_query_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [
                { "message": "Throttled" },
                { "message": "Field 'nope' doesn't exist on type 'Shop'" }
            ]
        })))
        .mount(&server)
        .await;

    let client = create_client(&server, ApiVersion::latest());
    let result: Result<ShopData, _> = client.execute("Shop", "query Shop { shop { nope } }", json!({})).await;

    match result {
        Err(GraphqlError::Query { operation, messages }) => {
            assert_eq!(operation, "Shop");
            assert_eq!(messages.len(), 2);
            assert_eq!(messages[0], "Throttled");
        }
        other => panic!("expected a query error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unauthorized_response_is_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(401)
                .insert_header("X-Request-Id", "req-401")
                .set_body_json(json!({ "errors": "[API] Invalid API key or access token" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, ApiVersion::latest());
    let result = client.query("{ shop { name } }", None).await;

    match result {
        Err(GraphqlError::Http(HttpError::Response(error))) => {
            assert_eq!(error.code, 401);
            assert!(error.message.contains("Invalid API key"));
            assert_eq!(error.error_reference.as_deref(), Some("req-401"));
        }
        other => panic!("expected an HTTP 401 error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_query_returns_raw_body_with_errors_left_in_place() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [{ "message": "Access denied" }]
        })))
        .mount(&server)
        .await;

    let client = create_client(&server, ApiVersion::latest());
    let response = client.query("{ shop { name } }", None).await.unwrap();

    assert_eq!(response.code, 200);
    assert_eq!(response.body["errors"][0]["message"], "Access denied");
}

#[tokio::test]
async fn test_missing_data_is_unexpected_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "extensions": {} })))
        .mount(&server)
        .await;

    let client = create_client(&server, ApiVersion::latest());
    let result: Result<ShopData, _> = client.execute("Shop", "query Shop { shop { name } }", json!({})).await;

    assert!(matches!(
        result,
        Err(GraphqlError::UnexpectedResponse { path: "data", .. })
    ));
}

#[tokio::test]
async fn test_user_agent_prefix_from_environment_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header_regex("User-Agent", r"^PrintShop/2\.1 \| Draft Order Admin v"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": { "shop": { "name": "Print Shop" } } })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let config = AdminConfigBuilder::from_lookup(|name| {
        match name {
            "SHOPIFY_SHOP" => Some("test-shop".to_string()),
            "SHOPIFY_ACCESS_TOKEN" => Some("test-token".to_string()),
            "SHOPIFY_API_HOST" => Some(uri.clone()),
            "SHOPIFY_USER_AGENT_PREFIX" => Some("PrintShop/2.1".to_string()),
            _ => None,
        }
    })
    .unwrap()
    .build()
    .unwrap();
    let client = GraphqlClient::new(&Session::from_config(&config), Some(&config));

    let data: ShopData = client
        .execute("Shop", "query Shop { shop { name } }", json!({}))
        .await
        .unwrap();
    assert_eq!(data.shop.name, "Print Shop");
}
