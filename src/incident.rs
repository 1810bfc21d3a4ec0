//! Incident entity and the small enums used to select views of it.
//!
//! DESIGN
//! ======
//! `Incident` is immutable once stored; display order and visibility are
//! always derived elsewhere (`view`) from `SeverityFilter` and `SortOrder`.

#[cfg(test)]
#[path = "incident_test.rs"]
mod incident_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::macros::format_description;

/// Identifier of an incident, unique within one collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IncidentId(pub u64);

impl fmt::Display for IncidentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Incident severity. Used for grouping only; no ordering is implied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Draft default.
    #[default]
    Low,
    Medium,
    High,
}

impl Severity {
    /// All severities, in the order the dashboard lists them.
    pub const ALL: [Severity; 3] = [Severity::Low, Severity::Medium, Severity::High];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Lowercase token used for CSS modifiers and form values.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown severity token.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity: {0}")]
pub struct ParseSeverityError(pub String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParseSeverityError(s.to_owned())),
        }
    }
}

/// A stored incident.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incident {
    pub id: IncidentId,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    #[serde(with = "time::serde::rfc3339")]
    pub reported_at: OffsetDateTime,
}

impl Incident {
    /// Human-readable report time in UTC, e.g. `Apr 1, 2025, 02:30 PM`.
    #[must_use]
    pub fn reported_label(&self) -> String {
        self.reported_at
            .to_offset(time::UtcOffset::UTC)
            .format(format_description!(
                "[month repr:short] [day padding:none], [year], [hour repr:12]:[minute] [period]"
            ))
            .unwrap_or_default()
    }
}

/// Severity filter for the derived view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeverityFilter {
    #[default]
    All,
    Only(Severity),
}

impl SeverityFilter {
    /// Every filter choice, in the order the filter buttons are shown.
    pub const CHOICES: [SeverityFilter; 4] = [
        SeverityFilter::All,
        SeverityFilter::Only(Severity::Low),
        SeverityFilter::Only(Severity::Medium),
        SeverityFilter::Only(Severity::High),
    ];

    #[must_use]
    pub fn allows(self, severity: Severity) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == severity,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(severity) => severity.label(),
        }
    }
}

impl From<Severity> for SeverityFilter {
    fn from(value: Severity) -> Self {
        Self::Only(value)
    }
}

/// Date ordering for the derived view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Most recent `reported_at` first.
    #[default]
    Newest,
    Oldest,
}

impl SortOrder {
    pub const CHOICES: [SortOrder; 2] = [SortOrder::Newest, SortOrder::Oldest];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest First",
            Self::Oldest => "Oldest First",
        }
    }
}
