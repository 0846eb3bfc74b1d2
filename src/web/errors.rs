//! Handler errors and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use crate::clients::GraphqlError;
use crate::draft_orders::DraftOrderError;
use crate::editor::EditError;
use crate::web::render;

/// Errors returned by request handlers, rendered as an HTML error page.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required request parameter is absent or empty.
    #[error("Missing {0}")]
    MissingParameter(&'static str),

    /// The request is malformed.
    #[error("{0}")]
    BadRequest(String),

    /// The requested draft order does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The Admin API call failed.
    #[error("Shopify Admin API request failed: {0}")]
    Upstream(#[source] GraphqlError),

    /// The page could not be rendered.
    #[error("Failed to render page: {0}")]
    Render(#[from] serde_json::Error),
}

impl AppError {
    /// The HTTP status this error maps to.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MissingParameter(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DraftOrderError> for AppError {
    fn from(e: DraftOrderError) -> Self {
        match e {
            DraftOrderError::InvalidId { .. } => Self::BadRequest(e.to_string()),
            DraftOrderError::NotFound { .. } => Self::NotFound(e.to_string()),
            DraftOrderError::Graphql(source) => Self::Upstream(source),
        }
    }
}

impl From<EditError> for AppError {
    fn from(e: EditError) -> Self {
        Self::BadRequest(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Upstream(source) => {
                tracing::error!(error = %source, "Upstream request failed");
            }
            Self::Render(source) => {
                tracing::error!(error = %source, "Page rendering failed");
            }
            _ => tracing::debug!(status = status.as_u16(), error = %self, "Rejected request"),
        }

        (status, Html(render::error_page(status, &self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpError, HttpResponseError};

    #[test]
    fn test_missing_parameter_returns_400() {
        let error = AppError::MissingParameter("draft order ID");
        assert_eq!(error.to_string(), "Missing draft order ID");
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_draft_order_errors_map_to_status() {
        let invalid: AppError = DraftOrderError::InvalidId {
            raw: "x".to_string(),
        }
        .into();
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        let missing: AppError = DraftOrderError::NotFound {
            id: "gid://shopify/DraftOrder/0".to_string(),
        }
        .into();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let upstream: AppError = DraftOrderError::Graphql(GraphqlError::Http(
            HttpError::Response(HttpResponseError {
                code: 401,
                message: "{}".to_string(),
                error_reference: None,
            }),
        ))
        .into();
        assert_eq!(upstream.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_edit_error_is_bad_request() {
        let error: AppError = EditError::IndexOutOfRange {
            what: "line item",
            index: 4,
            len: 1,
        }
        .into();
        assert!(matches!(error, AppError::BadRequest(_)));
    }
}
