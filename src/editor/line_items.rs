//! Copy-on-write line item edits.

use serde::{Deserialize, Serialize};

use crate::config::CurrencyCode;
use crate::draft_orders::{Attribute, LineItem, MoneyV2};
use crate::editor::{coerce_price, coerce_quantity, EditError};

/// Title given to a freshly added line item.
pub const PLACEHOLDER_TITLE: &str = "Niestandardowy wydruk 3D";

const LINE_ITEM: &str = "line item";
const ATTRIBUTE: &str = "attribute";

/// The editor's working copy: an ordered list of line items.
///
/// Every operation borrows `self` and returns a new list, leaving untouched
/// items in their original order.
///
/// # Example
///
/// ```rust
/// use draft_order_admin::editor::LineItems;
/// use draft_order_admin::CurrencyCode;
///
/// let before = LineItems::default().add_line_item(&CurrencyCode::default(), 1);
/// let after = before.add_attribute(0).unwrap().remove_attribute(0, 0).unwrap();
///
/// assert_eq!(before, after);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineItems(Vec<LineItem>);

impl LineItems {
    /// Wraps an existing list.
    #[must_use]
    pub const fn new(items: Vec<LineItem>) -> Self {
        Self(items)
    }

    /// Returns the items in order.
    #[must_use]
    pub fn as_slice(&self) -> &[LineItem] {
        &self.0
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the list, returning the items.
    #[must_use]
    pub fn into_inner(self) -> Vec<LineItem> {
        self.0
    }

    /// Sets the title of one item.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::IndexOutOfRange`] if `item` does not exist.
    pub fn rename(&self, item: usize, title: impl Into<String>) -> Result<Self, EditError> {
        let title = title.into();
        self.with_item(item, |line_item| line_item.title = title)
    }

    /// Sets the quantity of one item from raw input, see [`coerce_quantity`].
    ///
    /// # Errors
    ///
    /// Returns [`EditError::IndexOutOfRange`] if `item` does not exist.
    pub fn set_quantity(&self, item: usize, raw: &str) -> Result<Self, EditError> {
        let quantity = coerce_quantity(raw);
        self.with_item(item, |line_item| line_item.quantity = quantity)
    }

    /// Sets the unit price amount of one item from raw input, see
    /// [`coerce_price`]. The currency is kept.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::IndexOutOfRange`] if `item` does not exist.
    pub fn set_price(&self, item: usize, raw: &str) -> Result<Self, EditError> {
        let amount = coerce_price(raw);
        self.with_item(item, |line_item| line_item.unit_price.amount = amount)
    }

    /// Appends an empty attribute to one item.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::IndexOutOfRange`] if `item` does not exist.
    pub fn add_attribute(&self, item: usize) -> Result<Self, EditError> {
        self.with_item(item, |line_item| {
            line_item.custom_attributes.push(Attribute::default());
        })
    }

    /// Removes one attribute of one item.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::IndexOutOfRange`] if `item` or `attribute` does
    /// not exist.
    pub fn remove_attribute(&self, item: usize, attribute: usize) -> Result<Self, EditError> {
        self.try_with_attributes(item, |attributes| {
            check_index(ATTRIBUTE, attribute, attributes.len())?;
            attributes.remove(attribute);
            Ok(())
        })
    }

    /// Sets the key of one attribute.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::IndexOutOfRange`] if `item` or `attribute` does
    /// not exist.
    pub fn set_attribute_key(
        &self,
        item: usize,
        attribute: usize,
        key: impl Into<String>,
    ) -> Result<Self, EditError> {
        let key = key.into();
        self.try_with_attributes(item, |attributes| {
            check_index(ATTRIBUTE, attribute, attributes.len())?;
            attributes[attribute].key = key;
            Ok(())
        })
    }

    /// Sets the value of one attribute.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::IndexOutOfRange`] if `item` or `attribute` does
    /// not exist.
    pub fn set_attribute_value(
        &self,
        item: usize,
        attribute: usize,
        value: impl Into<String>,
    ) -> Result<Self, EditError> {
        let value = value.into();
        self.try_with_attributes(item, |attributes| {
            check_index(ATTRIBUTE, attribute, attributes.len())?;
            attributes[attribute].value = value;
            Ok(())
        })
    }

    /// Appends a placeholder item priced at 0 in `currency`.
    ///
    /// The temporary id is `new-{now_millis}`, bumped until no other item
    /// uses it.
    #[must_use]
    pub fn add_line_item(&self, currency: &CurrencyCode, now_millis: i64) -> Self {
        let mut stamp = now_millis;
        let id = loop {
            let candidate = format!("new-{stamp}");
            if !self.0.iter().any(|item| item.id.as_deref() == Some(candidate.as_str())) {
                break candidate;
            }
            stamp += 1;
        };

        let mut items = self.0.clone();
        items.push(LineItem {
            id: Some(id),
            title: PLACEHOLDER_TITLE.to_string(),
            quantity: 1,
            unit_price: MoneyV2::zero(currency.as_ref()),
            custom_attributes: Vec::new(),
        });
        Self(items)
    }

    /// Removes one item.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::IndexOutOfRange`] if `item` does not exist.
    pub fn remove_line_item(&self, item: usize) -> Result<Self, EditError> {
        check_index(LINE_ITEM, item, self.0.len())?;
        let mut items = self.0.clone();
        items.remove(item);
        Ok(Self(items))
    }

    fn with_item(
        &self,
        item: usize,
        edit: impl FnOnce(&mut LineItem),
    ) -> Result<Self, EditError> {
        check_index(LINE_ITEM, item, self.0.len())?;
        let mut items = self.0.clone();
        edit(&mut items[item]);
        Ok(Self(items))
    }

    fn try_with_attributes(
        &self,
        item: usize,
        edit: impl FnOnce(&mut Vec<Attribute>) -> Result<(), EditError>,
    ) -> Result<Self, EditError> {
        check_index(LINE_ITEM, item, self.0.len())?;
        let mut items = self.0.clone();
        edit(&mut items[item].custom_attributes)?;
        Ok(Self(items))
    }
}

impl From<Vec<LineItem>> for LineItems {
    fn from(items: Vec<LineItem>) -> Self {
        Self(items)
    }
}

const fn check_index(what: &'static str, index: usize, len: usize) -> Result<(), EditError> {
    if index < len {
        Ok(())
    } else {
        Err(EditError::IndexOutOfRange { what, index, len })
    }
}
