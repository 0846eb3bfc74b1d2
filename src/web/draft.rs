//! `GET /app/draft` and `POST /app/draft`: the line item editor.
//!
//! Each POST rebuilds the [`EditorSession`] from the form: the working copy,
//! the open title edit and every visible input. The `Saving` state lasts for
//! the duration of the save request.

use std::collections::BTreeMap;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;

use crate::draft_orders::{self, DraftOrderId};
use crate::editor::{EditCommand, EditorSession, LineItems};
use crate::web::render::{self, EditorField, EditorView};
use crate::web::{AppError, AppState};

const ORDER_ID: &str = "draft order ID";

/// Query string of `GET /app/draft`.
#[derive(Debug, Default, Deserialize)]
pub struct DetailQuery {
    id: Option<String>,
    saved: Option<String>,
}

/// Fields posted by the editor form.
///
/// `intent` may carry its operands inline, as in `remove_attribute:0:2`;
/// `item` and `attribute` are read when it does not. Inputs named by
/// [`EditorField`] land in `fields`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorForm {
    order_id: Option<String>,
    order_name: Option<String>,
    line_items: Option<String>,
    title_editing: Option<String>,
    intent: Option<String>,
    item: Option<String>,
    attribute: Option<String>,
    value: Option<String>,
    #[serde(flatten)]
    fields: BTreeMap<String, String>,
}

/// What a posted editor form asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormIntent {
    /// Send the working copy through `draftOrderUpdate`.
    Save,
    /// Keep the posted input values and re-render.
    Apply,
    /// Apply one edit and re-render.
    Edit(EditCommand),
}

impl FormIntent {
    /// Reads the intent and its operands. A missing intent means save.
    fn from_form(form: &EditorForm) -> Result<Self, AppError> {
        let mut parts = form.intent.as_deref().unwrap_or("save").split(':');
        let intent = parts.next().unwrap_or_default();
        let item_operand = parts.next().or(form.item.as_deref());
        let attribute_operand = parts.next().or(form.attribute.as_deref());

        let item = || index(item_operand, "item");
        let attribute = || index(attribute_operand, "attribute");
        let value = || {
            form.value
                .clone()
                .ok_or_else(|| AppError::BadRequest(format!("Missing value for '{intent}'")))
        };

        let command = match intent {
            "save" => return Ok(Self::Save),
            "apply" => return Ok(Self::Apply),
            "add_line_item" => EditCommand::AddLineItem,
            "remove_line_item" => EditCommand::RemoveLineItem { item: item()? },
            "add_attribute" => EditCommand::AddAttribute { item: item()? },
            "remove_attribute" => EditCommand::RemoveAttribute {
                item: item()?,
                attribute: attribute()?,
            },
            "set_title" => EditCommand::SetTitle {
                item: item()?,
                title: value()?,
            },
            "set_quantity" => EditCommand::SetQuantity {
                item: item()?,
                raw: value()?,
            },
            "set_price" => EditCommand::SetPrice {
                item: item()?,
                raw: value()?,
            },
            "set_attribute_key" => EditCommand::SetAttributeKey {
                item: item()?,
                attribute: attribute()?,
                key: value()?,
            },
            "set_attribute_value" => EditCommand::SetAttributeValue {
                item: item()?,
                attribute: attribute()?,
                value: value()?,
            },
            "edit_title" => EditCommand::EditTitle { item: item()? },
            "finish_title" => EditCommand::FinishTitle,
            other => return Err(AppError::BadRequest(format!("Unknown intent '{other}'"))),
        };
        Ok(Self::Edit(command))
    }
}

fn index(raw: Option<&str>, name: &str) -> Result<usize, AppError> {
    let raw = raw.ok_or_else(|| AppError::BadRequest(format!("Missing {name} index")))?;
    raw.trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid {name} index '{raw}'")))
}

fn required(value: Option<String>, name: &'static str) -> Result<String, AppError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(AppError::MissingParameter(name))
}

/// Writes the posted input values into the working copy.
fn apply_fields(
    mut items: LineItems,
    fields: &BTreeMap<String, String>,
) -> Result<LineItems, AppError> {
    for (name, value) in fields {
        items = match EditorField::parse(name) {
            Some(EditorField::Title(item)) => items.rename(item, value.as_str())?,
            Some(EditorField::Price(item)) => items.set_price(item, value)?,
            Some(EditorField::Quantity(item)) => items.set_quantity(item, value)?,
            Some(EditorField::AttributeKey(item, attribute)) => {
                items.set_attribute_key(item, attribute, value.as_str())?
            }
            Some(EditorField::AttributeValue(item, attribute)) => {
                items.set_attribute_value(item, attribute, value.as_str())?
            }
            None => items,
        };
    }
    Ok(items)
}

pub async fn show_draft_order(
    State(state): State<AppState>,
    Query(query): Query<DetailQuery>,
) -> Result<Html<String>, AppError> {
    let id = DraftOrderId::parse(&required(query.id, ORDER_ID)?)?;
    let saved = query.saved.as_deref() == Some("1");

    let detail =
        draft_orders::fetch_draft_order(&state.client, &id, &state.default_currency).await?;
    let session = EditorSession::new(
        detail.id,
        LineItems::new(detail.line_items),
        state.default_currency.clone(),
    );

    let html = render::draft_order_editor(&EditorView {
        order_name: &detail.name,
        session: &session,
        saved,
        user_errors: &[],
    })?;
    Ok(Html(html))
}

pub async fn submit_draft_order(
    State(state): State<AppState>,
    Form(form): Form<EditorForm>,
) -> Result<Response, AppError> {
    let id = DraftOrderId::parse(&required(form.order_id.clone(), ORDER_ID)?)?;
    let raw_items = required(form.line_items.clone(), "line items")?;
    let items: LineItems = serde_json::from_str(&raw_items)
        .map_err(|e| AppError::BadRequest(format!("Invalid line items: {e}")))?;
    let items = apply_fields(items, &form.fields)?;
    let intent = FormIntent::from_form(&form)?;
    let title_editing = form
        .title_editing
        .as_deref()
        .filter(|raw| !raw.trim().is_empty())
        .map(|raw| index(Some(raw), "title"))
        .transpose()?;
    let order_name = form
        .order_name
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| format!("#{}", id.numeric_id()));

    let mut session = EditorSession::new(id, items, state.default_currency.clone());
    if let Some(item) = title_editing {
        session.begin_title_edit(item)?;
    }

    let command = match intent {
        FormIntent::Save => return save_working_copy(&state, session, &order_name).await,
        FormIntent::Apply => None,
        FormIntent::Edit(command) => Some(command),
    };
    if let Some(command) = command {
        session.apply(command, chrono::Utc::now().timestamp_millis())?;
    }

    let html = render::draft_order_editor(&EditorView {
        order_name: &order_name,
        session: &session,
        saved: false,
        user_errors: &[],
    })?;
    Ok(Html(html).into_response())
}

async fn save_working_copy(
    state: &AppState,
    mut session: EditorSession,
    order_name: &str,
) -> Result<Response, AppError> {
    let payload = session.begin_save()?;
    let outcome = draft_orders::update_line_items(&state.client, session.order_id(), &payload).await;
    session.finish_save();
    let outcome = outcome?;

    if outcome.is_success() {
        let location = format!("/app/draft?id={}&saved=1", session.order_id().numeric_id());
        return Ok(Redirect::to(&location).into_response());
    }

    let html = render::draft_order_editor(&EditorView {
        order_name,
        session: &session,
        saved: false,
        user_errors: &outcome.user_errors,
    })?;
    Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response())
}
