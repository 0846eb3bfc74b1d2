//! Single draft order fetch.

use serde_json::json;

use crate::clients::GraphqlClient;
use crate::config::CurrencyCode;
use crate::draft_orders::model::{DraftOrderDetail, LineItem, MoneyV2};
use crate::draft_orders::queries::{DraftOrderData, LineItemNode, DRAFT_ORDER, DRAFT_ORDER_OPERATION};
use crate::draft_orders::{DraftOrderError, DraftOrderId};

/// Fetches one draft order with its first line items.
///
/// A line item without a price gets amount 0 in `default_currency`.
///
/// # Errors
///
/// Returns [`DraftOrderError::NotFound`] when the API returns `null` for the
/// order, and [`DraftOrderError::Graphql`] when the call itself fails.
pub async fn fetch_draft_order(
    client: &GraphqlClient,
    id: &DraftOrderId,
    default_currency: &CurrencyCode,
) -> Result<DraftOrderDetail, DraftOrderError> {
    let data: DraftOrderData = client
        .execute(DRAFT_ORDER_OPERATION, DRAFT_ORDER, json!({ "id": id.as_str() }))
        .await?;

    let node = data.draft_order.ok_or_else(|| DraftOrderError::NotFound {
        id: id.to_string(),
    })?;

    let line_items = node
        .line_items
        .edges
        .into_iter()
        .map(|edge| into_line_item(edge.node, default_currency))
        .collect();

    Ok(DraftOrderDetail {
        id: node.id,
        name: node.name,
        invoice_url: node.invoice_url,
        created_at: node.created_at,
        status: node.status,
        line_items,
    })
}

fn into_line_item(node: LineItemNode, default_currency: &CurrencyCode) -> LineItem {
    LineItem {
        id: node.id,
        title: node.title,
        quantity: node.quantity.max(1),
        unit_price: node
            .original_unit_price_with_currency
            .unwrap_or_else(|| MoneyV2::zero(default_currency.as_ref())),
        custom_attributes: node.custom_attributes.unwrap_or_default(),
    }
}
