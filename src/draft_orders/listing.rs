//! Cursor-paginated draft order listing.

use serde_json::json;

use crate::clients::GraphqlClient;
use crate::draft_orders::model::{DraftOrderPage, PageCursor};
use crate::draft_orders::queries::{DraftOrdersData, DRAFT_ORDERS, DRAFT_ORDERS_OPERATION};
use crate::draft_orders::DraftOrderError;

/// Number of draft orders requested per page.
pub const PAGE_SIZE: u32 = 10;

/// Fetches one page of draft orders, newest id first.
///
/// `None` or an empty cursor requests the first page. The cursor is passed to
/// the API unmodified.
///
/// # Errors
///
/// Returns [`DraftOrderError::Graphql`] when the call fails or the response
/// carries top-level `errors`.
pub async fn list_draft_orders(
    client: &GraphqlClient,
    after: Option<&PageCursor>,
) -> Result<DraftOrderPage, DraftOrderError> {
    let after = after.filter(|cursor| !cursor.as_str().is_empty());
    let variables = json!({
        "first": PAGE_SIZE,
        "after": after.map(PageCursor::as_str),
    });

    let data: DraftOrdersData = client
        .execute(DRAFT_ORDERS_OPERATION, DRAFT_ORDERS, variables)
        .await?;
    let connection = data.draft_orders;

    let edge_cursor = connection
        .edges
        .last()
        .and_then(|edge| edge.cursor.clone());
    let end_cursor = connection
        .page_info
        .end_cursor
        .or(edge_cursor)
        .map(PageCursor::new);
    let orders: Vec<_> = connection.edges.into_iter().map(|edge| edge.node).collect();

    tracing::debug!(
        count = orders.len(),
        has_next_page = connection.page_info.has_next_page,
        "Fetched draft order page"
    );

    Ok(DraftOrderPage {
        orders,
        end_cursor,
        has_next_page: connection.page_info.has_next_page,
    })
}
