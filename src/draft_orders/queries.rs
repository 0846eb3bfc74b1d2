//! GraphQL documents and the raw response shapes they decode into.

use serde::Deserialize;

use crate::draft_orders::model::{Attribute, DraftOrderStatus, DraftOrderSummary, MoneyV2, UserError};
use crate::draft_orders::DraftOrderId;

pub const DRAFT_ORDERS_OPERATION: &str = "DraftOrders";
pub const DRAFT_ORDER_OPERATION: &str = "DraftOrder";
pub const DRAFT_ORDER_UPDATE_OPERATION: &str = "DraftOrderUpdate";

pub const DRAFT_ORDERS: &str = r"query DraftOrders($first: Int!, $after: String) {
  draftOrders(first: $first, after: $after, reverse: true, sortKey: ID) {
    edges {
      cursor
      node {
        id
        name
        createdAt
        status
        invoiceUrl
      }
    }
    pageInfo {
      hasNextPage
      endCursor
    }
  }
}";

pub const DRAFT_ORDER: &str = r"query DraftOrder($id: ID!) {
  draftOrder(id: $id) {
    id
    name
    invoiceUrl
    createdAt
    status
    lineItems(first: 10) {
      edges {
        node {
          id
          title
          quantity
          originalUnitPriceWithCurrency {
            amount
            currencyCode
          }
          customAttributes {
            key
            value
          }
        }
      }
    }
  }
}";

pub const DRAFT_ORDER_UPDATE: &str = r"mutation DraftOrderUpdate($id: ID!, $input: DraftOrderInput!) {
  draftOrderUpdate(id: $id, input: $input) {
    draftOrder {
      id
    }
    userErrors {
      field
      message
    }
  }
}";

#[derive(Debug, Deserialize)]
pub struct Connection<T> {
    #[serde(default = "Vec::new")]
    pub edges: Vec<Edge<T>>,
}

#[derive(Debug, Deserialize)]
pub struct Edge<T> {
    #[serde(default)]
    pub cursor: Option<String>,
    pub node: T,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    #[serde(default)]
    pub end_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftOrdersData {
    pub draft_orders: DraftOrdersConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftOrdersConnection {
    #[serde(default = "Vec::new")]
    pub edges: Vec<Edge<DraftOrderSummary>>,
    pub page_info: PageInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftOrderData {
    pub draft_order: Option<DraftOrderNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftOrderNode {
    pub id: DraftOrderId,
    pub name: String,
    #[serde(default)]
    pub invoice_url: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub status: DraftOrderStatus,
    pub line_items: Connection<LineItemNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemNode {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub quantity: u32,
    #[serde(default)]
    pub original_unit_price_with_currency: Option<MoneyV2>,
    #[serde(default)]
    pub custom_attributes: Option<Vec<Attribute>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftOrderUpdateData {
    pub draft_order_update: Option<DraftOrderUpdatePayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftOrderUpdatePayload {
    #[serde(default)]
    pub draft_order: Option<UpdatedDraftOrder>,
    #[serde(default)]
    pub user_errors: Vec<UserError>,
}

#[derive(Debug, Deserialize)]
pub struct UpdatedDraftOrder {
    pub id: DraftOrderId,
}
