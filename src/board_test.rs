use super::*;
use crate::draft::DraftFieldName;
use crate::incident::Severity;
use time::macros::datetime;

fn fill(board: &mut IncidentBoard, title: &str, description: &str, severity: Severity) {
    board.set_draft_field(DraftField::Title(title.to_owned()));
    board.set_draft_field(DraftField::Description(description.to_owned()));
    board.set_draft_field(DraftField::Severity(severity));
}

fn view_ids(board: &IncidentBoard) -> Vec<u64> {
    board.view().iter().map(|i| i.id.0).collect()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn seeded_board_defaults() {
    let board = IncidentBoard::seeded();
    assert_eq!(board.incidents().len(), 3);
    assert_eq!(board.filter(), SeverityFilter::All);
    assert_eq!(board.sort_order(), SortOrder::Newest);
    assert_eq!(board.expanded(), None);
    assert!(board.draft().is_blank());
    assert!(!board.form_open());
    assert_eq!(board.notice(), None);
}

#[test]
fn seeded_view_is_newest_first() {
    let board = IncidentBoard::seeded();
    assert_eq!(view_ids(&board), [2, 3, 1]);
}

// =============================================================
// Filter / sort / expand
// =============================================================

#[test]
fn set_filter_and_sort_recompute_view() {
    let mut board = IncidentBoard::seeded();
    board.set_filter(SeverityFilter::Only(Severity::Low));
    assert_eq!(view_ids(&board), [3]);
    board.set_filter(SeverityFilter::All);
    board.set_sort_order(SortOrder::Oldest);
    assert_eq!(view_ids(&board), [1, 3, 2]);
    assert_eq!(board.incidents().iter().map(|i| i.id.0).collect::<Vec<_>>(), [1, 2, 3]);
}

#[test]
fn toggle_expand_keeps_one_expanded() {
    let mut board = IncidentBoard::seeded();
    board.toggle_expand(IncidentId(1));
    assert!(board.is_expanded(IncidentId(1)));
    board.toggle_expand(IncidentId(3));
    assert!(!board.is_expanded(IncidentId(1)));
    assert!(board.is_expanded(IncidentId(3)));
    board.toggle_expand(IncidentId(3));
    assert_eq!(board.expanded(), None);
}

// =============================================================
// Form
// =============================================================

#[test]
fn toggle_form_opens_and_closing_discards_draft() {
    let mut board = IncidentBoard::seeded();
    board.toggle_form();
    assert!(board.form_open());
    fill(&mut board, "half", "typed", Severity::High);
    board.toggle_form();
    assert!(!board.form_open());
    assert!(board.draft().is_blank());
}

#[test]
fn cancel_draft_resets_draft_and_closes_form() {
    let mut board = IncidentBoard::seeded();
    board.toggle_form();
    fill(&mut board, "t", "d", Severity::Medium);
    board.cancel_draft();
    assert!(board.draft().is_blank());
    assert!(!board.form_open());
    assert_eq!(board.incidents().len(), 3);
}

#[test]
fn submit_success_appends_and_resets() {
    let mut board = IncidentBoard::seeded();
    board.toggle_form();
    fill(&mut board, " Reward hacking ", "Agent gamed the metric", Severity::Medium);
    let stored = board.submit_draft().unwrap();
    assert_eq!(stored.id, IncidentId(4));
    assert_eq!(stored.title, "Reward hacking");
    assert_eq!(board.incidents().get(IncidentId(4)), Some(&stored));
    assert!(board.draft().is_blank());
    assert!(!board.form_open());
    assert_eq!(board.notice(), None);
}

#[test]
fn submit_whitespace_title_is_rejected_without_changes() {
    let mut board = IncidentBoard::seeded();
    board.toggle_form();
    fill(&mut board, "  ", "described", Severity::High);
    let before_draft = board.draft().clone();

    let err = board.submit_draft().unwrap_err();

    assert_eq!(err, ValidationError::MissingField(DraftFieldName::Title));
    assert_eq!(board.incidents().len(), 3);
    assert_eq!(board.draft(), &before_draft);
    assert!(board.form_open());
    assert_eq!(board.notice(), Some(err));
}

#[test]
fn notice_clears_on_dismiss_and_on_success() {
    let mut board = IncidentBoard::seeded();
    board.toggle_form();
    assert!(board.submit_draft().is_err());
    board.dismiss_notice();
    assert_eq!(board.notice(), None);

    assert!(board.submit_draft().is_err());
    fill(&mut board, "title", "description", Severity::Low);
    board.submit_draft().unwrap();
    assert_eq!(board.notice(), None);
}

// =============================================================
// End to end
// =============================================================

#[test]
fn new_high_incident_joins_high_view_after_older_one() {
    let mut board = IncidentBoard::seeded();
    board.toggle_form();
    fill(&mut board, "Autonomous agent escalation", "Agent requested extra privileges", Severity::High);
    let stored = board.submit_draft_at(datetime!(2025-06-10 16:45:00 UTC)).unwrap();
    assert_eq!(stored.id, IncidentId(4));
    assert_eq!(board.incidents().len(), 4);

    board.set_filter(SeverityFilter::Only(Severity::High));
    assert_eq!(board.view().len(), 2);
    board.set_sort_order(SortOrder::Oldest);
    assert_eq!(view_ids(&board), [2, 4]);
    assert_eq!(board.severity_counts().high, 2);
}
