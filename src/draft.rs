//! Submission form draft and its validation.
//!
//! DESIGN
//! ======
//! The draft is transient: it is never stored in the collection and is reset
//! as a whole on submit or cancel. `validate_draft` is pure; resetting the
//! draft and closing the form are left to the caller.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::incident::Severity;

/// In-progress form values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Draft {
    pub fn set_field(&mut self, field: DraftField) {
        match field {
            DraftField::Title(value) => self.title = value,
            DraftField::Description(value) => self.description = value,
            DraftField::Severity(value) => self.severity = value,
        }
    }

    /// True when nothing has been typed and the severity is still the default.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

/// A single form edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DraftField {
    Title(String),
    Description(String),
    Severity(Severity),
}

impl DraftField {
    #[must_use]
    pub fn name(&self) -> DraftFieldName {
        match self {
            Self::Title(_) => DraftFieldName::Title,
            Self::Description(_) => DraftFieldName::Description,
            Self::Severity(_) => DraftFieldName::Severity,
        }
    }
}

/// Names of the draft fields as they appear in form inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftFieldName {
    Title,
    Description,
    Severity,
}

impl DraftFieldName {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Severity => "severity",
        }
    }
}

impl fmt::Display for DraftFieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a form input name is not a draft field.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown draft field: {0}")]
pub struct ParseDraftFieldError(pub String);

impl FromStr for DraftFieldName {
    type Err = ParseDraftFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Self::Title),
            "description" => Ok(Self::Description),
            "severity" => Ok(Self::Severity),
            _ => Err(ParseDraftFieldError(s.to_owned())),
        }
    }
}

/// A validated draft, ready for `IncidentCollection::append`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncidentInput {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

/// Check the required text fields and produce an append-ready input.
///
/// Title and description are trimmed; the title is checked first.
///
/// # Errors
///
/// Returns [`ValidationError::MissingField`] when the title or description
/// is empty after trimming.
pub fn validate_draft(draft: &Draft) -> Result<IncidentInput, ValidationError> {
    let title = required(&draft.title, DraftFieldName::Title)?;
    let description = required(&draft.description, DraftFieldName::Description)?;
    Ok(IncidentInput { title, description, severity: draft.severity })
}

fn required(value: &str, field: DraftFieldName) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(trimmed.to_owned())
}
