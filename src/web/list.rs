//! `GET /app`: the draft order list.

use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;

use crate::draft_orders::{self, PageCursor};
use crate::web::{render, AppError, AppState};

/// Query string of `GET /app`.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    after: Option<String>,
}

pub async fn list_draft_orders(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Html<String>, AppError> {
    let after = query
        .after
        .filter(|cursor| !cursor.is_empty())
        .map(PageCursor::new);

    let page = draft_orders::list_draft_orders(&state.client, after.as_ref()).await?;
    Ok(Html(render::draft_order_list(&page)))
}
