//! Line item editing.
//!
//! The working copy is a [`LineItems`] value. Each edit returns a new list
//! instead of mutating in place, and [`EditorSession`] tracks which title is
//! open and whether a save is running. A save turns the working copy into a
//! [`SavePayload`] that replaces every line item of the order.
//!
//! Saving is last-writer-wins: edits made elsewhere between the fetch and
//! the save are overwritten.

mod coerce;
mod errors;
mod line_items;
mod payload;
mod session;

pub use coerce::{coerce_price, coerce_quantity};
pub use errors::EditError;
pub use line_items::{LineItems, PLACEHOLDER_TITLE};
pub use payload::{SaveLineItem, SavePayload};
pub use session::{EditCommand, EditorSession, EditorState};
