//! The incident board: the single owner of dashboard state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Presentation code holds one `IncidentBoard`, calls the command methods in
//! response to user actions and re-reads the accessors to render. Every
//! command runs to completion synchronously.
//!
//! DESIGN
//! ======
//! A rejected submission is recorded in `notice` instead of interrupting the
//! user; nothing else changes on failure, so the form stays open with the
//! typed values intact.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::collection::IncidentCollection;
use crate::draft::{Draft, DraftField, validate_draft};
use crate::error::ValidationError;
use crate::incident::{Incident, IncidentId, SeverityFilter, SortOrder};
use crate::selection::toggle_expand;
use crate::view::{SeverityCounts, derive, severity_counts};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IncidentBoard {
    incidents: IncidentCollection,
    filter: SeverityFilter,
    sort_order: SortOrder,
    expanded: Option<IncidentId>,
    draft: Draft,
    form_open: bool,
    notice: Option<ValidationError>,
}

impl IncidentBoard {
    /// A board over `incidents` with default selection: all severities,
    /// newest first, nothing expanded, form closed.
    #[must_use]
    pub fn new(incidents: IncidentCollection) -> Self {
        Self { incidents, ..Self::default() }
    }

    /// A board holding the built-in sample incidents.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(IncidentCollection::seeded())
    }

    // =============================================================
    // Accessors
    // =============================================================

    /// Current filtered and sorted incidents.
    #[must_use]
    pub fn view(&self) -> Vec<Incident> {
        derive(&self.incidents, self.filter, self.sort_order)
    }

    #[must_use]
    pub fn incidents(&self) -> &IncidentCollection {
        &self.incidents
    }

    #[must_use]
    pub fn filter(&self) -> SeverityFilter {
        self.filter
    }

    #[must_use]
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    #[must_use]
    pub fn expanded(&self) -> Option<IncidentId> {
        self.expanded
    }

    #[must_use]
    pub fn is_expanded(&self, id: IncidentId) -> bool {
        self.expanded == Some(id)
    }

    #[must_use]
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    #[must_use]
    pub fn form_open(&self) -> bool {
        self.form_open
    }

    /// Last rejected submission, until dismissed or superseded.
    #[must_use]
    pub fn notice(&self) -> Option<ValidationError> {
        self.notice
    }

    #[must_use]
    pub fn severity_counts(&self) -> SeverityCounts {
        severity_counts(&self.incidents)
    }

    // =============================================================
    // Commands
    // =============================================================

    pub fn set_filter(&mut self, filter: SeverityFilter) {
        debug!(filter = filter.label(), "filter changed");
        self.filter = filter;
    }

    pub fn set_sort_order(&mut self, sort_order: SortOrder) {
        debug!(?sort_order, "sort order changed");
        self.sort_order = sort_order;
    }

    pub fn toggle_expand(&mut self, id: IncidentId) {
        self.expanded = toggle_expand(self.expanded, id);
        debug!(incident_id = %id, expanded = self.expanded.is_some(), "detail toggled");
    }

    pub fn set_draft_field(&mut self, field: DraftField) {
        self.draft.set_field(field);
    }

    /// Header button: open the form, or close it discarding the draft.
    pub fn toggle_form(&mut self) {
        if self.form_open {
            self.cancel_draft();
        } else {
            self.form_open = true;
        }
    }

    /// Discard the draft and close the form.
    pub fn cancel_draft(&mut self) {
        self.draft = Draft::default();
        self.form_open = false;
        self.notice = None;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Validate the draft and append it, reported now.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] when a required field is
    /// blank; the board is left unchanged apart from `notice`.
    pub fn submit_draft(&mut self) -> Result<Incident, ValidationError> {
        self.submit_draft_at(OffsetDateTime::now_utc())
    }

    /// Validate the draft and append it with an explicit report time.
    ///
    /// # Errors
    ///
    /// See [`IncidentBoard::submit_draft`].
    pub fn submit_draft_at(&mut self, reported_at: OffsetDateTime) -> Result<Incident, ValidationError> {
        let input = match validate_draft(&self.draft) {
            Ok(input) => input,
            Err(err) => {
                warn!(error = %err, "incident draft rejected");
                self.notice = Some(err);
                return Err(err);
            }
        };

        let incident = self.incidents.append_at(input, reported_at);
        info!(incident_id = %incident.id, severity = %incident.severity, "incident reported");
        self.draft = Draft::default();
        self.form_open = false;
        self.notice = None;
        Ok(incident)
    }
}
