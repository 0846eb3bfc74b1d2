//! The `lineItems` input sent by a save.

use serde::Serialize;

use crate::draft_orders::{Attribute, MoneyV2};
use crate::editor::LineItems;

/// `DraftOrderInput` carrying the full replacement line item list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavePayload {
    /// Every line item of the working copy, in order.
    pub line_items: Vec<SaveLineItem>,
}

/// One `DraftOrderLineItemInput`. Local ids are never sent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveLineItem {
    /// Line item title.
    pub title: String,
    /// Quantity, never below 1.
    pub quantity: u32,
    /// Always `true`: every item is a physical print.
    pub requires_shipping: bool,
    /// Unit price with its currency.
    pub original_unit_price_with_currency: MoneyV2,
    /// Attributes with both a key and a value.
    pub custom_attributes: Vec<Attribute>,
}

impl SavePayload {
    /// Builds the payload, dropping attributes with an empty key or value
    /// and raising any zero quantity to 1.
    #[must_use]
    pub fn from_items(items: &LineItems) -> Self {
        let line_items = items
            .as_slice()
            .iter()
            .map(|item| SaveLineItem {
                title: item.title.clone(),
                quantity: item.quantity.max(1),
                requires_shipping: true,
                original_unit_price_with_currency: item.unit_price.clone(),
                custom_attributes: item
                    .custom_attributes
                    .iter()
                    .filter(|attribute| !attribute.key.is_empty() && !attribute.value.is_empty())
                    .cloned()
                    .collect(),
            })
            .collect();

        Self { line_items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft_orders::LineItem;
    use bigdecimal::BigDecimal;
    use std::str::FromStr;

    fn attribute(key: &str, value: &str) -> Attribute {
        Attribute {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    fn items() -> LineItems {
        LineItems::new(vec![LineItem {
            id: Some("new-1".to_string()),
            title: "Vase".to_string(),
            quantity: 3,
            unit_price: MoneyV2 {
                amount: BigDecimal::from_str("12.5").unwrap(),
                currency_code: "PLN".to_string(),
            },
            custom_attributes: vec![
                attribute("color", "red"),
                attribute("", "orphan"),
                attribute("size", ""),
                attribute("", ""),
            ],
        }])
    }

    #[test]
    fn test_payload_drops_incomplete_attributes() {
        let payload = SavePayload::from_items(&items());
        assert_eq!(
            payload.line_items[0].custom_attributes,
            vec![attribute("color", "red")]
        );
    }

    #[test]
    fn test_payload_serializes_mutation_input_shape() {
        let value = serde_json::to_value(SavePayload::from_items(&items())).unwrap();
        let line_item = &value["lineItems"][0];

        assert_eq!(line_item["title"], "Vase");
        assert_eq!(line_item["quantity"], 3);
        assert_eq!(line_item["requiresShipping"], true);
        assert_eq!(line_item["originalUnitPriceWithCurrency"]["currencyCode"], "PLN");
        assert_eq!(line_item["customAttributes"][0]["value"], "red");
        assert!(line_item.get("id").is_none());
    }

    #[test]
    fn test_payload_never_sends_zero_quantity() {
        let mut raw = items().into_inner();
        raw[0].quantity = 0;
        let payload = SavePayload::from_items(&LineItems::new(raw));
        assert_eq!(payload.line_items[0].quantity, 1);
    }

    #[test]
    fn test_empty_working_copy_clears_line_items() {
        let payload = SavePayload::from_items(&LineItems::default());
        assert!(payload.line_items.is_empty());
    }
}
