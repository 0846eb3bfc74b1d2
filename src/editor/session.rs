//! Editor session state machine.
//!
//! A session lives for one web request. The open title edit is carried
//! between requests in the form, and `Saving` covers exactly one
//! `draftOrderUpdate` call.

use crate::config::CurrencyCode;
use crate::draft_orders::DraftOrderId;
use crate::editor::{EditError, LineItems, SavePayload};

/// Where the editor is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorState {
    /// Accepting edits. `title_editing` names the item whose title input is
    /// shown, if any.
    Editing {
        /// Index of the item whose title is being edited.
        title_editing: Option<usize>,
    },
    /// A save has been submitted and not yet finished.
    Saving,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::Editing {
            title_editing: None,
        }
    }
}

/// One edit applied to the working copy.
#[derive(Clone, Debug, PartialEq, Eq)]
///
/// `item` and `attribute` are indices into the working copy.
pub enum EditCommand {
    /// Append a placeholder item and open its title input.
    AddLineItem,
    /// Remove one item.
    RemoveLineItem { item: usize },
    /// Append an empty attribute to one item.
    AddAttribute { item: usize },
    /// Remove one attribute.
    RemoveAttribute { item: usize, attribute: usize },
    /// Rename one item, closing its title input if open.
    SetTitle { item: usize, title: String },
    /// Set a quantity from raw input.
    SetQuantity { item: usize, raw: String },
    /// Set a unit price from raw input.
    SetPrice { item: usize, raw: String },
    /// Set an attribute's key.
    SetAttributeKey { item: usize, attribute: usize, key: String },
    /// Set an attribute's value.
    SetAttributeValue { item: usize, attribute: usize, value: String },
    /// Open the title input of one item.
    EditTitle { item: usize },
    /// Close any open title input.
    FinishTitle,
}

/// The working copy of one draft order plus its editor state.
///
/// # Example
///
/// ```rust
/// use draft_order_admin::editor::{EditCommand, EditorSession, EditorState, LineItems};
/// use draft_order_admin::{CurrencyCode, DraftOrderId};
///
/// let mut session = EditorSession::new(
///     DraftOrderId::from_numeric(1),
///     LineItems::default(),
///     CurrencyCode::default(),
/// );
/// session.apply(EditCommand::AddLineItem, 1_000).unwrap();
/// assert_eq!(session.state(), EditorState::Editing { title_editing: Some(0) });
///
/// let payload = session.begin_save().unwrap();
/// assert_eq!(payload.line_items.len(), 1);
/// session.finish_save();
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorSession {
    order_id: DraftOrderId,
    items: LineItems,
    state: EditorState,
    default_currency: CurrencyCode,
}

impl EditorSession {
    /// Starts a session in the `Editing` state with no title edit open.
    #[must_use]
    pub fn new(order_id: DraftOrderId, items: LineItems, default_currency: CurrencyCode) -> Self {
        Self {
            order_id,
            items,
            state: EditorState::default(),
            default_currency,
        }
    }

    /// The draft order being edited.
    #[must_use]
    pub const fn order_id(&self) -> &DraftOrderId {
        &self.order_id
    }

    /// The working copy.
    #[must_use]
    pub const fn items(&self) -> &LineItems {
        &self.items
    }

    /// The current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> EditorState {
        self.state
    }

    /// Index of the item showing its title input, if any.
    #[must_use]
    pub const fn title_editing(&self) -> Option<usize> {
        match self.state {
            EditorState::Editing { title_editing } => title_editing,
            EditorState::Saving => None,
        }
    }

    /// Applies one command. `now_millis` seeds temporary ids of added items.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::SaveInProgress`] while saving, and
    /// [`EditError::IndexOutOfRange`] for a missing item or attribute. A
    /// failed command leaves the session unchanged.
    pub fn apply(&mut self, command: EditCommand, now_millis: i64) -> Result<(), EditError> {
        let title_editing = self.editing()?;

        match command {
            EditCommand::AddLineItem => {
                self.items = self.items.add_line_item(&self.default_currency, now_millis);
                self.set_title_editing(Some(self.items.len() - 1));
            }
            EditCommand::RemoveLineItem { item } => {
                self.items = self.items.remove_line_item(item)?;
                let shifted = title_editing.and_then(|editing| match editing.cmp(&item) {
                    std::cmp::Ordering::Less => Some(editing),
                    std::cmp::Ordering::Equal => None,
                    std::cmp::Ordering::Greater => Some(editing - 1),
                });
                self.set_title_editing(shifted);
            }
            EditCommand::AddAttribute { item } => {
                self.items = self.items.add_attribute(item)?;
            }
            EditCommand::RemoveAttribute { item, attribute } => {
                self.items = self.items.remove_attribute(item, attribute)?;
            }
            EditCommand::SetTitle { item, title } => {
                self.items = self.items.rename(item, title)?;
                if title_editing == Some(item) {
                    self.set_title_editing(None);
                }
            }
            EditCommand::SetQuantity { item, raw } => {
                self.items = self.items.set_quantity(item, &raw)?;
            }
            EditCommand::SetPrice { item, raw } => {
                self.items = self.items.set_price(item, &raw)?;
            }
            EditCommand::SetAttributeKey {
                item,
                attribute,
                key,
            } => {
                self.items = self.items.set_attribute_key(item, attribute, key)?;
            }
            EditCommand::SetAttributeValue {
                item,
                attribute,
                value,
            } => {
                self.items = self.items.set_attribute_value(item, attribute, value)?;
            }
            EditCommand::EditTitle { item } => self.begin_title_edit(item)?,
            EditCommand::FinishTitle => self.finish_title_edit(),
        }

        Ok(())
    }

    /// Shows the title input for one item.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::SaveInProgress`] while saving, and
    /// [`EditError::IndexOutOfRange`] if `item` does not exist.
    pub fn begin_title_edit(&mut self, item: usize) -> Result<(), EditError> {
        self.editing()?;
        if item >= self.items.len() {
            return Err(EditError::IndexOutOfRange {
                what: "line item",
                index: item,
                len: self.items.len(),
            });
        }
        self.set_title_editing(Some(item));
        Ok(())
    }

    /// Closes any open title input. No effect while saving.
    pub fn finish_title_edit(&mut self) {
        self.set_title_editing(None);
    }

    /// Moves to `Saving` and returns the mutation input.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::SaveInProgress`] if a save is already running.
    pub fn begin_save(&mut self) -> Result<SavePayload, EditError> {
        self.editing()?;
        self.state = EditorState::Saving;
        Ok(SavePayload::from_items(&self.items))
    }

    /// Returns to `Editing`, whatever the mutation's outcome.
    pub fn finish_save(&mut self) {
        self.state = EditorState::default();
    }

    const fn editing(&self) -> Result<Option<usize>, EditError> {
        match self.state {
            EditorState::Editing { title_editing } => Ok(title_editing),
            EditorState::Saving => Err(EditError::SaveInProgress),
        }
    }

    fn set_title_editing(&mut self, title_editing: Option<usize>) {
        if let EditorState::Editing { .. } = self.state {
            self.state = EditorState::Editing { title_editing };
        }
    }
}
