//! Editor errors.

use thiserror::Error;

/// Errors from editing the working copy.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EditError {
    /// An item or attribute index does not exist.
    #[error("No {what} at index {index} (have {len})")]
    IndexOutOfRange {
        /// `"line item"` or `"attribute"`.
        what: &'static str,
        /// The requested index.
        index: usize,
        /// The number of elements present.
        len: usize,
    },

    /// A save is already running for this session.
    #[error("A save is already in progress")]
    SaveInProgress,
}
