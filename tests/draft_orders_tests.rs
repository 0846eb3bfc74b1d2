//! Integration tests for draft order listing, fetch and update.

use std::collections::HashSet;

use bigdecimal::BigDecimal;
use draft_order_admin::draft_orders::{
    fetch_draft_order, list_draft_orders, update_line_items, DraftOrderStatus, PAGE_SIZE,
};
use draft_order_admin::editor::{LineItems, SavePayload};
use draft_order_admin::{
    AccessToken, AdminConfig, CurrencyCode, DraftOrderError, DraftOrderId, GraphqlClient, HostUrl, Session,
    ShopDomain,
};
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, body_string_contains, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_client(server: &MockServer) -> GraphqlClient {
    let config = AdminConfig::builder()
        .shop(ShopDomain::new("test-shop").unwrap())
        .access_token(AccessToken::new("test-token").unwrap())
        .api_host(HostUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    GraphqlClient::new(&Session::from_config(&config), Some(&config))
}

/// A `draftOrders` response for ids `from` down to `to`.
fn draft_orders_page(from: u64, to: u64, has_next_page: bool) -> Value {
    let edges: Vec<Value> = (to..=from)
        .rev()
        .map(|id| {
            json!({
                "cursor": format!("cursor-{id}"),
                "node": {
                    "id": format!("gid://shopify/DraftOrder/{id}"),
                    "name": format!("#D{id}"),
                    "createdAt": "2025-03-01T10:00:00Z",
                    "status": "OPEN",
                    "invoiceUrl": null
                }
            })
        })
        .collect();

    json!({
        "data": {
            "draftOrders": {
                "edges": edges,
                "pageInfo": {
                    "hasNextPage": has_next_page,
                    "endCursor": format!("cursor-{to}")
                }
            }
        }
    })
}

#[tokio::test]
async fn test_fifteen_orders_paginate_into_ten_then_five() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("query DraftOrders"))
        .and(body_partial_json(json!({ "variables": { "first": 10, "after": null } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(draft_orders_page(15, 6, true)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_string_contains("query DraftOrders"))
        .and(body_partial_json(json!({ "variables": { "after": "cursor-6" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(draft_orders_page(5, 1, false)))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);

    let first = list_draft_orders(&client, None).await.unwrap();
    assert_eq!(first.orders.len(), PAGE_SIZE as usize);
    assert!(first.has_next_page);
    assert_eq!(first.orders[0].id.numeric_id(), "15");

    let second = list_draft_orders(&client, first.end_cursor.as_ref()).await.unwrap();
    assert_eq!(second.orders.len(), 5);
    assert!(!second.has_next_page);

    let mut seen = HashSet::new();
    for order in first.orders.iter().chain(&second.orders) {
        assert!(seen.insert(order.id.clone()), "{} returned twice", order.id);
    }
    assert_eq!(seen.len(), 15);
}

#[tokio::test]
async fn test_empty_listing_has_no_next_page() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "draftOrders": {
                    "edges": [],
                    "pageInfo": { "hasNextPage": false, "endCursor": null }
                }
            }
        })))
        .mount(&server)
        .await;

    let page = list_draft_orders(&create_client(&server), None).await.unwrap();

    assert!(page.orders.is_empty());
    assert!(!page.has_next_page);
    assert!(page.end_cursor.is_none());
}

#[tokio::test]
async fn test_listing_propagates_top_level_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "errors": [{ "message": "Access denied for draftOrders field." }] })),
        )
        .mount(&server)
        .await;

    let result = list_draft_orders(&create_client(&server), None).await;
    assert!(matches!(result, Err(DraftOrderError::Graphql(_))));
}

#[tokio::test]
async fn test_fetch_maps_line_items_and_defaults_missing_price() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "variables": { "id": "gid://shopify/DraftOrder/42" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "draftOrder": {
                    "id": "gid://shopify/DraftOrder/42",
                    "name": "#D42",
                    "invoiceUrl": "https://test-shop.myshopify.com/invoice/abc",
                    "createdAt": "2025-03-01T10:00:00Z",
                    "status": "INVOICE_SENT",
                    "lineItems": {
                        "edges": [
                            { "node": {
                                "id": "gid://shopify/DraftOrderLineItem/1",
                                "title": "Vase",
                                "quantity": 2,
                                "originalUnitPriceWithCurrency": { "amount": "19.99", "currencyCode": "PLN" },
                                "customAttributes": [{ "key": "color", "value": "red" }]
                            } },
                            { "node": {
                                "id": "gid://shopify/DraftOrderLineItem/2",
                                "title": "Custom print",
                                "quantity": 1,
                                "originalUnitPriceWithCurrency": null,
                                "customAttributes": []
                            } }
                        ]
                    }
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let detail = fetch_draft_order(
        &create_client(&server),
        &DraftOrderId::from_numeric(42),
        &CurrencyCode::new("EUR").unwrap(),
    )
    .await
    .unwrap();

    assert_eq!(detail.name, "#D42");
    assert_eq!(detail.status, DraftOrderStatus::InvoiceSent);
    assert_eq!(detail.line_items.len(), 2);
    assert_eq!(detail.line_items[0].unit_price.amount.to_string(), "19.99");
    assert_eq!(detail.line_items[0].custom_attributes[0].key, "color");
    assert_eq!(detail.line_items[1].unit_price.currency_code, "EUR");
    assert_eq!(detail.line_items[1].unit_price.amount, BigDecimal::from(0));
}

#[tokio::test]
async fn test_fetch_null_order_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "draftOrder": null } })))
        .mount(&server)
        .await;

    let result = fetch_draft_order(
        &create_client(&server),
        &DraftOrderId::from_numeric(0),
        &CurrencyCode::default(),
    )
    .await;

    assert!(matches!(
        result,
        Err(DraftOrderError::NotFound { id }) if id == "gid://shopify/DraftOrder/0"
    ));
}

#[tokio::test]
async fn test_update_sends_full_line_item_list() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("mutation DraftOrderUpdate"))
        .and(body_partial_json(json!({
            "variables": {
                "id": "gid://shopify/DraftOrder/7",
                "input": {
                    "lineItems": [{
                        "title": "Niestandardowy wydruk 3D",
                        "quantity": 1,
                        "requiresShipping": true,
                        "customAttributes": []
                    }]
                }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "draftOrderUpdate": {
                    "draftOrder": { "id": "gid://shopify/DraftOrder/7" },
                    "userErrors": []
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let items = LineItems::default().add_line_item(&CurrencyCode::default(), 1_700_000_000_000);
    let outcome = update_line_items(
        &create_client(&server),
        &DraftOrderId::from_numeric(7),
        &SavePayload::from_items(&items),
    )
    .await
    .unwrap();

    assert!(outcome.is_success());
    assert_eq!(outcome.draft_order_id, Some(DraftOrderId::from_numeric(7)));
}

#[tokio::test]
async fn test_update_returns_user_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "draftOrderUpdate": {
                    "draftOrder": null,
                    "userErrors": [{ "field": ["lineItems", "0", "quantity"], "message": "must be positive" }]
                }
            }
        })))
        .mount(&server)
        .await;

    let outcome = update_line_items(
        &create_client(&server),
        &DraftOrderId::from_numeric(7),
        &SavePayload::from_items(&LineItems::default()),
    )
    .await
    .unwrap();

    assert!(!outcome.is_success());
    assert!(outcome.draft_order_id.is_none());
    assert_eq!(outcome.user_errors[0].message, "must be positive");
}
