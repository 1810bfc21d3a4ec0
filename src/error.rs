//! Errors surfaced by board commands.

use crate::draft::DraftFieldName;

/// Rejection of a submitted draft.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required text field is empty after trimming surrounding whitespace.
    #[error("please fill in all required fields ({0} is empty)")]
    MissingField(DraftFieldName),
}
