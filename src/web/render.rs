//! HTML rendering for the admin views.
//!
//! The editor has no client-side script. It is one form: the working copy
//! rides in a hidden field, and each button names the intent it posts.

use axum::http::StatusCode;

use crate::draft_orders::{DraftOrderPage, DraftOrderSummary, LineItem, UserError};
use crate::editor::EditorSession;

const STYLE: &str = "body{font-family:system-ui,sans-serif;margin:2rem;color:#202223}\
table{border-collapse:collapse;width:100%}\
th,td{text-align:left;padding:.5rem;border-bottom:1px solid #e1e3e5}\
button{margin:.25rem}\
.default-action{position:absolute;left:-9999px}\
.line-item{border:1px solid #e1e3e5;border-radius:8px;padding:1rem;margin-bottom:1rem}\
.banner{padding:.75rem;border-radius:6px;margin-bottom:1rem}\
.banner.success{background:#e3f1df}.banner.critical{background:#fbeae5}";

/// Everything the editor page shows.
#[derive(Debug)]
pub struct EditorView<'a> {
    /// Display name of the order, e.g. `#D12`.
    pub order_name: &'a str,
    /// The working copy and its editor state.
    pub session: &'a EditorSession,
    /// Shows the "Order saved!" banner.
    pub saved: bool,
    /// Validation errors from the last save attempt.
    pub user_errors: &'a [UserError],
}

/// Escapes text for use in HTML element content and quoted attributes.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <h1>{title}</h1>\n{body}</body>\n</html>\n",
        title = escape_html(title),
    )
}

/// Renders the draft order table with an optional "Load more" link.
#[must_use]
pub fn draft_order_list(page: &DraftOrderPage) -> String {
    let mut body = String::from("<h2>Draft Orders</h2>\n");

    if page.orders.is_empty() {
        body.push_str("<p>No draft orders found.</p>\n");
    } else {
        body.push_str(
            "<table>\n<thead><tr><th>Order</th><th>Status</th><th>Created At</th>\
             <th>Invoice</th></tr></thead>\n<tbody>\n",
        );
        for order in &page.orders {
            body.push_str(&summary_row(order));
        }
        body.push_str("</tbody>\n</table>\n");
    }

    if let Some(cursor) = page.end_cursor.as_ref().filter(|_| page.has_next_page) {
        body.push_str(&format!(
            "<p><a class=\"load-more\" href=\"/app?after={}\">Load more</a></p>\n",
            escape_html(&urlencoding::encode(cursor.as_str()))
        ));
    }

    layout("Draft Orders", &body)
}

fn summary_row(order: &DraftOrderSummary) -> String {
    let order_cell = if order.name.is_empty() {
        "#".to_string()
    } else {
        format!(
            "<a href=\"/app/draft?id={}\">{}</a>",
            urlencoding::encode(order.id.numeric_id()),
            escape_html(&order.name)
        )
    };
    let invoice_cell = order.invoice_url.as_deref().map_or_else(
        || "-".to_string(),
        |url| format!("<a href=\"{}\" target=\"_blank\">View invoice</a>", escape_html(url)),
    );

    format!(
        "<tr><td>{order_cell}</td><td>{}</td><td>{}</td><td>{invoice_cell}</td></tr>\n",
        escape_html(&order.status.to_string()),
        order.created_at.format("%Y-%m-%d"),
    )
}

/// A per-item input of the editor form. The input name carries the indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorField {
    /// `title_{item}`, rendered only while that title is being edited.
    Title(usize),
    /// `price_{item}`
    Price(usize),
    /// `quantity_{item}`
    Quantity(usize),
    /// `attr_key_{item}_{attribute}`
    AttributeKey(usize, usize),
    /// `attr_value_{item}_{attribute}`
    AttributeValue(usize, usize),
}

impl EditorField {
    /// The form input name.
    #[must_use]
    pub fn name(self) -> String {
        match self {
            Self::Title(item) => format!("title_{item}"),
            Self::Price(item) => format!("price_{item}"),
            Self::Quantity(item) => format!("quantity_{item}"),
            Self::AttributeKey(item, attribute) => format!("attr_key_{item}_{attribute}"),
            Self::AttributeValue(item, attribute) => format!("attr_value_{item}_{attribute}"),
        }
    }

    /// Reads an input name back. Names of other inputs yield `None`.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        if let Some(rest) = name.strip_prefix("attr_key_") {
            let (item, attribute) = index_pair(rest)?;
            return Some(Self::AttributeKey(item, attribute));
        }
        if let Some(rest) = name.strip_prefix("attr_value_") {
            let (item, attribute) = index_pair(rest)?;
            return Some(Self::AttributeValue(item, attribute));
        }
        if let Some(rest) = name.strip_prefix("title_") {
            return rest.parse().ok().map(Self::Title);
        }
        if let Some(rest) = name.strip_prefix("price_") {
            return rest.parse().ok().map(Self::Price);
        }
        name.strip_prefix("quantity_")
            .and_then(|rest| rest.parse().ok())
            .map(Self::Quantity)
    }
}

fn index_pair(raw: &str) -> Option<(usize, usize)> {
    let (item, attribute) = raw.split_once('_')?;
    Some((item.parse().ok()?, attribute.parse().ok()?))
}

/// Renders the line item editor as a single form.
///
/// Every button posts all visible inputs along with its own `intent`, so a
/// typed value is never lost to a click elsewhere.
///
/// # Errors
///
/// Returns an error if the working copy cannot be serialized into the
/// hidden form field.
pub fn draft_order_editor(view: &EditorView<'_>) -> Result<String, serde_json::Error> {
    let session = view.session;
    let line_items = serde_json::to_string(session.items())?;
    let mut body = String::new();

    if view.saved {
        body.push_str("<div class=\"banner success\" role=\"status\">Order saved!</div>\n");
    }
    if !view.user_errors.is_empty() {
        body.push_str(
            "<div class=\"banner critical\" role=\"alert\"><p>The order was not saved:</p><ul>",
        );
        for error in view.user_errors {
            body.push_str(&format!("<li>{}</li>", escape_html(&error.to_string())));
        }
        body.push_str("</ul></div>\n");
    }

    body.push_str("<form method=\"post\" action=\"/app/draft\">\n");
    // Enter in a text input submits through the first button.
    body.push_str(
        "<button type=\"submit\" name=\"intent\" value=\"apply\" class=\"default-action\" \
         tabindex=\"-1\" aria-hidden=\"true\">Apply</button>\n",
    );
    body.push_str(&format!(
        "<input type=\"hidden\" name=\"orderId\" value=\"{}\">\
         <input type=\"hidden\" name=\"orderName\" value=\"{}\">\
         <input type=\"hidden\" name=\"lineItems\" value=\"{}\">",
        escape_html(session.order_id().as_str()),
        escape_html(view.order_name),
        escape_html(&line_items),
    ));
    if let Some(item) = session.title_editing() {
        body.push_str(&format!(
            "<input type=\"hidden\" name=\"titleEditing\" value=\"{item}\">"
        ));
    }

    body.push_str("\n<h2>Line Items</h2>\n");
    for (index, item) in session.items().as_slice().iter().enumerate() {
        let editing_title = session.title_editing() == Some(index);
        body.push_str(&line_item_card(index, item, editing_title));
    }

    body.push_str(&button("add_line_item", "Add New Line Item"));
    body.push_str("\n<hr>\n");
    body.push_str(&button("save", "Save All Changes"));
    body.push_str("\n</form>\n<p><a href=\"/app\">Back to draft orders</a></p>\n");

    Ok(layout(&format!("Edit {}", view.order_name), &body))
}

fn line_item_card(index: usize, item: &LineItem, editing_title: bool) -> String {
    let mut card = String::from("<section class=\"line-item\">\n");

    if editing_title {
        card.push_str(&value_input(
            "text",
            EditorField::Title(index),
            "Title",
            &item.title,
            " autofocus",
        ));
        card.push_str(&button("finish_title", "Done"));
    } else {
        card.push_str(&format!("<strong>{}</strong>", escape_html(&item.title)));
        card.push_str(&button(&format!("edit_title:{index}"), "Edit title"));
    }

    let currency = escape_html(&item.unit_price.currency_code);
    card.push_str(&format!(
        "<label>Price ({currency}) {}</label>",
        value_input(
            "number",
            EditorField::Price(index),
            "Price",
            &item.unit_price.amount.to_string(),
            " step=\"0.01\"",
        )
    ));
    card.push_str(&format!(
        "<label>Quantity {}</label>",
        value_input(
            "number",
            EditorField::Quantity(index),
            "Quantity",
            &item.quantity.to_string(),
            " min=\"1\"",
        )
    ));
    card.push_str(&button(&format!("remove_line_item:{index}"), "Remove"));
    card.push('\n');

    for (attribute_index, attribute) in item.custom_attributes.iter().enumerate() {
        card.push_str("<div class=\"attribute\">");
        card.push_str(&value_input(
            "text",
            EditorField::AttributeKey(index, attribute_index),
            "Name",
            &attribute.key,
            "",
        ));
        card.push_str(&value_input(
            "text",
            EditorField::AttributeValue(index, attribute_index),
            "Value",
            &attribute.value,
            "",
        ));
        card.push_str(&button(
            &format!("remove_attribute:{index}:{attribute_index}"),
            "Remove property",
        ));
        card.push_str("</div>\n");
    }

    card.push_str(&button(&format!("add_attribute:{index}"), "+ Add Property"));
    card.push_str("\n</section>\n");
    card
}

fn value_input(kind: &str, field: EditorField, label: &str, value: &str, extra: &str) -> String {
    format!(
        "<input type=\"{kind}\" name=\"{}\" aria-label=\"{label}\" value=\"{}\"{extra}>",
        field.name(),
        escape_html(value)
    )
}

fn button(intent: &str, label: &str) -> String {
    format!(
        "<button type=\"submit\" name=\"intent\" value=\"{}\">{}</button>",
        escape_html(intent),
        escape_html(label)
    )
}

/// Renders an error page for `status`.
#[must_use]
pub fn error_page(status: StatusCode, message: &str) -> String {
    let title = status.canonical_reason().unwrap_or("Error");
    layout(
        title,
        &format!(
            "<div class=\"banner critical\" role=\"alert\"><p>{}</p></div>\n\
             <p><a href=\"/app\">Back to draft orders</a></p>\n",
            escape_html(message)
        ),
    )
}
