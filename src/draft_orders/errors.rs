//! Draft order operation errors.

use thiserror::Error;

use crate::clients::GraphqlError;

/// Errors from draft order fetch and update operations.
///
/// # Example
///
/// ```rust
/// use draft_order_admin::draft_orders::{DraftOrderError, DraftOrderId};
///
/// let error = DraftOrderId::parse("abc").unwrap_err();
/// assert!(matches!(error, DraftOrderError::InvalidId { .. }));
/// ```
#[derive(Debug, Error)]
pub enum DraftOrderError {
    /// The identifier is neither a draft order gid nor a numeric id.
    #[error("Invalid draft order ID: '{raw}'")]
    InvalidId {
        /// The rejected input.
        raw: String,
    },

    /// The Admin API returned `null` for the requested draft order.
    #[error("Draft order not found: {id}")]
    NotFound {
        /// The gid that was requested.
        id: String,
    },

    /// The underlying GraphQL call failed.
    #[error(transparent)]
    Graphql(#[from] GraphqlError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let error = DraftOrderError::InvalidId {
            raw: "x1".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid draft order ID: 'x1'");

        let error = DraftOrderError::NotFound {
            id: "gid://shopify/DraftOrder/7".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Draft order not found: gid://shopify/DraftOrder/7"
        );
    }

    #[test]
    fn test_from_graphql_error() {
        let error: DraftOrderError = GraphqlError::UnexpectedResponse {
            operation: "DraftOrder".to_string(),
            path: "data",
        }
        .into();
        assert!(matches!(error, DraftOrderError::Graphql(_)));
    }
}
