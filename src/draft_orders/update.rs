//! Line item replacement through `draftOrderUpdate`.

use serde_json::json;

use crate::clients::{GraphqlClient, GraphqlError};
use crate::draft_orders::model::UserError;
use crate::draft_orders::queries::{
    DraftOrderUpdateData, DRAFT_ORDER_UPDATE, DRAFT_ORDER_UPDATE_OPERATION,
};
use crate::draft_orders::{DraftOrderError, DraftOrderId};
use crate::editor::SavePayload;

/// Result of a `draftOrderUpdate` call that reached the API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// The updated order, when the mutation succeeded.
    pub draft_order_id: Option<DraftOrderId>,
    /// Validation errors reported by the mutation.
    pub user_errors: Vec<UserError>,
}

impl UpdateOutcome {
    /// Returns `true` when the mutation reported no user errors.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.user_errors.is_empty()
    }
}

/// Replaces every line item of a draft order with the payload's items.
///
/// The remote mutation is all-or-nothing. User errors are logged at WARN and
/// returned in the outcome rather than as an `Err`.
///
/// # Errors
///
/// Returns [`DraftOrderError::Graphql`] when the call fails or the response
/// lacks a `draftOrderUpdate` payload.
pub async fn update_line_items(
    client: &GraphqlClient,
    id: &DraftOrderId,
    payload: &SavePayload,
) -> Result<UpdateOutcome, DraftOrderError> {
    let variables = json!({
        "id": id.as_str(),
        "input": payload,
    });

    let data: DraftOrderUpdateData = client
        .execute(DRAFT_ORDER_UPDATE_OPERATION, DRAFT_ORDER_UPDATE, variables)
        .await?;
    let result = data
        .draft_order_update
        .ok_or_else(|| GraphqlError::UnexpectedResponse {
            operation: DRAFT_ORDER_UPDATE_OPERATION.to_string(),
            path: "draftOrderUpdate",
        })?;

    for error in &result.user_errors {
        tracing::warn!(
            draft_order_id = %id,
            field = ?error.field,
            message = %error.message,
            "Draft order update rejected"
        );
    }
    if result.user_errors.is_empty() {
        tracing::info!(
            draft_order_id = %id,
            line_items = payload.line_items.len(),
            "Draft order updated"
        );
    }

    Ok(UpdateOutcome {
        draft_order_id: result.draft_order.map(|order| order.id),
        user_errors: result.user_errors,
    })
}
