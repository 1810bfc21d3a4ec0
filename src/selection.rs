//! Single-expansion toggle for incident detail views.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use crate::incident::IncidentId;

/// Next expanded incident after `clicked` is toggled.
///
/// Clicking the expanded incident collapses it; clicking any other expands
/// that one instead, so at most one incident is ever expanded.
#[must_use]
pub fn toggle_expand(current: Option<IncidentId>, clicked: IncidentId) -> Option<IncidentId> {
    if current == Some(clicked) { None } else { Some(clicked) }
}
