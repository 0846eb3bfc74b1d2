//! Draft order entities as returned by the Admin GraphQL API.
//!
//! Every entity is transient: it is fetched fresh for each request and never
//! cached. [`LineItem`] doubles as the element shape of the editor's working
//! copy, so it serializes back to the same camelCase JSON it was read from.

use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::draft_orders::DraftOrderError;

const GID_PREFIX: &str = "gid://shopify/DraftOrder/";

/// A draft order identifier in its `gid://shopify/DraftOrder/{n}` form.
///
/// # Example
///
/// ```rust
/// use draft_order_admin::DraftOrderId;
///
/// let id = DraftOrderId::parse("1024").unwrap();
/// assert_eq!(id.as_str(), "gid://shopify/DraftOrder/1024");
/// assert_eq!(id.numeric_id(), "1024");
///
/// let same = DraftOrderId::parse("gid://shopify/DraftOrder/1024").unwrap();
/// assert_eq!(id, same);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DraftOrderId(String);

impl DraftOrderId {
    /// Builds the gid for a numeric draft order id.
    #[must_use]
    pub fn from_numeric(id: u64) -> Self {
        Self(format!("{GID_PREFIX}{id}"))
    }

    /// Parses a full gid or a bare numeric id.
    ///
    /// Surrounding whitespace is ignored. `"0"` is a valid id.
    ///
    /// # Errors
    ///
    /// Returns [`DraftOrderError::InvalidId`] if the numeric part is empty or
    /// contains anything but ASCII digits.
    pub fn parse(raw: &str) -> Result<Self, DraftOrderError> {
        let trimmed = raw.trim();
        let numeric = trimmed.strip_prefix(GID_PREFIX).unwrap_or(trimmed);

        if numeric.is_empty() || !numeric.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DraftOrderError::InvalidId {
                raw: raw.to_string(),
            });
        }

        Ok(Self(format!("{GID_PREFIX}{numeric}")))
    }

    /// Returns the numeric tail, as used in `/app/draft?id=` links.
    #[must_use]
    pub fn numeric_id(&self) -> &str {
        &self.0[GID_PREFIX.len()..]
    }

    /// Returns the full gid.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DraftOrderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DraftOrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for DraftOrderId {
    type Error = DraftOrderError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DraftOrderId> for String {
    fn from(id: DraftOrderId) -> Self {
        id.0
    }
}

/// An opaque pagination cursor, passed back to the API verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageCursor(String);

impl PageCursor {
    /// Wraps a cursor string.
    #[must_use]
    pub fn new(cursor: impl Into<String>) -> Self {
        Self(cursor.into())
    }

    /// Returns the raw cursor.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PageCursor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Draft order status.
///
/// Values added by a newer API version land in [`DraftOrderStatus::Other`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum DraftOrderStatus {
    /// `OPEN`
    Open,
    /// `INVOICE_SENT`
    InvoiceSent,
    /// `COMPLETED`
    Completed,
    /// Any other value, kept as sent.
    Other(String),
}

impl From<String> for DraftOrderStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "OPEN" => Self::Open,
            "INVOICE_SENT" => Self::InvoiceSent,
            "COMPLETED" => Self::Completed,
            _ => Self::Other(value),
        }
    }
}

impl fmt::Display for DraftOrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => f.write_str("OPEN"),
            Self::InvoiceSent => f.write_str("INVOICE_SENT"),
            Self::Completed => f.write_str("COMPLETED"),
            Self::Other(status) => f.write_str(status),
        }
    }
}

/// One row of the draft order list.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftOrderSummary {
    /// The draft order gid.
    pub id: DraftOrderId,
    /// Display name, e.g. `#D12`.
    pub name: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Current status.
    pub status: DraftOrderStatus,
    /// Checkout link for the customer, once an invoice exists.
    #[serde(default)]
    pub invoice_url: Option<String>,
}

/// One draft order with its line items.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DraftOrderDetail {
    /// The draft order gid.
    pub id: DraftOrderId,
    /// Display name.
    pub name: String,
    /// Checkout link, if any.
    pub invoice_url: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Current status.
    pub status: DraftOrderStatus,
    /// The first line items of the order, in API order.
    pub line_items: Vec<LineItem>,
}

/// A monetary amount with its currency.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyV2 {
    /// Decimal amount. Accepts a JSON number or a decimal string; numbers
    /// keep their shortest decimal form.
    #[serde(deserialize_with = "decimal_amount")]
    pub amount: BigDecimal,
    /// Three-letter ISO 4217 code.
    pub currency_code: String,
}

impl MoneyV2 {
    /// A zero amount in the given currency.
    #[must_use]
    pub fn zero(currency_code: impl Into<String>) -> Self {
        Self {
            amount: BigDecimal::from(0),
            currency_code: currency_code.into(),
        }
    }
}

/// A custom key/value annotation on a line item.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Attribute name.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub key: String,
    /// Attribute value.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub value: String,
}

/// A line item of a draft order, or of the editor's working copy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Remote gid, or a temporary `new-{millis}` id for unsaved items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Line item title.
    pub title: String,
    /// Quantity, at least 1. Zero or negative input becomes 1.
    #[serde(deserialize_with = "positive_quantity")]
    pub quantity: u32,
    /// Unit price.
    #[serde(rename = "originalUnitPriceWithCurrency")]
    pub unit_price: MoneyV2,
    /// Custom attributes, in display order.
    #[serde(default)]
    pub custom_attributes: Vec<Attribute>,
}

/// One page of draft order summaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DraftOrderPage {
    /// Orders on this page, newest id first.
    pub orders: Vec<DraftOrderSummary>,
    /// Cursor to pass as `after` for the next page.
    pub end_cursor: Option<PageCursor>,
    /// Whether another page follows.
    pub has_next_page: bool,
}

/// A validation error reported by a mutation.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UserError {
    /// Path to the offending input field, if any.
    #[serde(default)]
    pub field: Option<Vec<String>>,
    /// Human-readable message.
    pub message: String,
}

impl fmt::Display for UserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) if !field.is_empty() => write!(f, "{}: {}", field.join("."), self.message),
            _ => f.write_str(&self.message),
        }
    }
}

fn decimal_amount<'de, D>(deserializer: D) -> Result<BigDecimal, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Text(String),
        Number(f64),
    }

    let text = match Amount::deserialize(deserializer)? {
        Amount::Text(text) => text,
        Amount::Number(number) => number.to_string(),
    };
    BigDecimal::from_str(text.trim()).map_err(de::Error::custom)
}

fn positive_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let quantity = i64::deserialize(deserializer)?;
    Ok(u32::try_from(quantity.max(1)).unwrap_or(u32::MAX))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_draft_order_id_accepts_numeric_and_gid() {
        let numeric = DraftOrderId::parse("42").unwrap();
        let gid = DraftOrderId::parse("gid://shopify/DraftOrder/42").unwrap();

        assert_eq!(numeric, gid);
        assert_eq!(numeric.as_str(), "gid://shopify/DraftOrder/42");
        assert_eq!(numeric.numeric_id(), "42");
        assert_eq!(DraftOrderId::from_numeric(42), numeric);
    }

    #[test]
    fn test_draft_order_id_accepts_zero() {
        let id = DraftOrderId::parse("0").unwrap();
        assert_eq!(id.numeric_id(), "0");
    }

    #[test]
    fn test_draft_order_id_rejects_invalid_input() {
        for raw in ["", "  ", "abc", "12a", "-1", "gid://shopify/DraftOrder/", "gid://shopify/Order/1"] {
            assert!(
                matches!(DraftOrderId::parse(raw), Err(DraftOrderError::InvalidId { .. })),
                "expected {raw:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_status_parsing_keeps_unknown_values() {
        let status: DraftOrderStatus = serde_json::from_value(json!("INVOICE_SENT")).unwrap();
        assert_eq!(status, DraftOrderStatus::InvoiceSent);

        let status: DraftOrderStatus = serde_json::from_value(json!("ARCHIVED")).unwrap();
        assert_eq!(status, DraftOrderStatus::Other("ARCHIVED".to_string()));
        assert_eq!(status.to_string(), "ARCHIVED");
    }

    #[test]
    fn test_summary_deserialization() {
        let summary: DraftOrderSummary = serde_json::from_value(json!({
            "id": "gid://shopify/DraftOrder/7",
            "name": "#D7",
            "createdAt": "2025-03-01T10:00:00Z",
            "status": "OPEN",
            "invoiceUrl": null
        }))
        .unwrap();

        assert_eq!(summary.id.numeric_id(), "7");
        assert_eq!(summary.status, DraftOrderStatus::Open);
        assert!(summary.invoice_url.is_none());
    }

    #[test]
    fn test_line_item_accepts_string_or_number_amount() {
        let from_string: LineItem = serde_json::from_value(json!({
            "title": "Print",
            "quantity": 2,
            "originalUnitPriceWithCurrency": { "amount": "12.50", "currencyCode": "PLN" }
        }))
        .unwrap();
        let from_number: LineItem = serde_json::from_value(json!({
            "title": "Print",
            "quantity": 2,
            "originalUnitPriceWithCurrency": { "amount": 12.5, "currencyCode": "PLN" }
        }))
        .unwrap();

        assert_eq!(from_string.unit_price.amount, BigDecimal::from_str("12.5").unwrap());
        assert_eq!(from_string.unit_price.amount, from_number.unit_price.amount);
        assert!(from_string.id.is_none());
        assert!(from_string.custom_attributes.is_empty());
    }

    #[test]
    fn test_numeric_amount_keeps_shortest_decimal_form() {
        let money: MoneyV2 =
            serde_json::from_value(json!({ "amount": 19.99, "currencyCode": "PLN" })).unwrap();

        assert_eq!(money.amount, BigDecimal::from_str("19.99").unwrap());
        assert_eq!(serde_json::to_value(&money).unwrap()["amount"], "19.99");

        let whole: MoneyV2 =
            serde_json::from_value(json!({ "amount": 20, "currencyCode": "PLN" })).unwrap();
        assert_eq!(whole.amount, BigDecimal::from(20));
    }

    #[test]
    fn test_malformed_amount_is_rejected() {
        let result: Result<MoneyV2, _> =
            serde_json::from_value(json!({ "amount": "twelve", "currencyCode": "PLN" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_line_item_quantity_is_raised_to_one() {
        for quantity in [json!(0), json!(-3)] {
            let item: LineItem = serde_json::from_value(json!({
                "title": "Print",
                "quantity": quantity,
                "originalUnitPriceWithCurrency": { "amount": "1.00", "currencyCode": "PLN" }
            }))
            .unwrap();
            assert_eq!(item.quantity, 1);
        }
    }

    #[test]
    fn test_line_item_serializes_camel_case() {
        let item = LineItem {
            id: Some("new-1".to_string()),
            title: "Print".to_string(),
            quantity: 1,
            unit_price: MoneyV2::zero("PLN"),
            custom_attributes: vec![Attribute {
                key: "color".to_string(),
                value: "red".to_string(),
            }],
        };

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["originalUnitPriceWithCurrency"]["currencyCode"], "PLN");
        assert_eq!(value["customAttributes"][0]["key"], "color");
        assert_eq!(value["id"], "new-1");
    }

    #[test]
    fn test_attribute_null_value_becomes_empty() {
        let attribute: Attribute =
            serde_json::from_value(json!({ "key": "note", "value": null })).unwrap();
        assert_eq!(attribute.value, "");
    }

    #[test]
    fn test_user_error_display() {
        let error = UserError {
            field: Some(vec!["lineItems".to_string(), "0".to_string(), "title".to_string()]),
            message: "can't be blank".to_string(),
        };
        assert_eq!(error.to_string(), "lineItems.0.title: can't be blank");

        let error = UserError {
            field: None,
            message: "Draft order is completed".to_string(),
        };
        assert_eq!(error.to_string(), "Draft order is completed");
    }
}
