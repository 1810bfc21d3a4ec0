//! Derived, display-ordered projections of the incident collection.
//!
//! DESIGN
//! ======
//! Everything here is a pure function of the collection and the current
//! selection. The stored order is never touched; callers get a fresh `Vec`.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::collection::IncidentCollection;
use crate::incident::{Incident, Severity, SeverityFilter, SortOrder};

/// Filter by severity, then order by `reported_at`.
///
/// The sort is stable: incidents reported at the same instant keep their
/// insertion order in both directions.
#[must_use]
pub fn derive(collection: &IncidentCollection, filter: SeverityFilter, order: SortOrder) -> Vec<Incident> {
    let mut visible: Vec<Incident> = collection
        .iter()
        .filter(|incident| filter.allows(incident.severity))
        .cloned()
        .collect();

    match order {
        SortOrder::Newest => visible.sort_by(|a, b| b.reported_at.cmp(&a.reported_at)),
        SortOrder::Oldest => visible.sort_by(|a, b| a.reported_at.cmp(&b.reported_at)),
    }
    visible
}

/// Per-severity totals over the whole collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl SeverityCounts {
    #[must_use]
    pub fn total(&self) -> usize {
        self.low + self.medium + self.high
    }

    /// Count shown next to a filter button.
    #[must_use]
    pub fn for_filter(&self, filter: SeverityFilter) -> usize {
        match filter {
            SeverityFilter::All => self.total(),
            SeverityFilter::Only(Severity::Low) => self.low,
            SeverityFilter::Only(Severity::Medium) => self.medium,
            SeverityFilter::Only(Severity::High) => self.high,
        }
    }
}

#[must_use]
pub fn severity_counts(collection: &IncidentCollection) -> SeverityCounts {
    let mut counts = SeverityCounts::default();
    for incident in collection {
        match incident.severity {
            Severity::Low => counts.low += 1,
            Severity::Medium => counts.medium += 1,
            Severity::High => counts.high += 1,
        }
    }
    counts
}
