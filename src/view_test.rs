use super::*;
use crate::incident::IncidentId;
use time::OffsetDateTime;
use time::macros::datetime;

fn incident(id: u64, severity: Severity, reported_at: OffsetDateTime) -> Incident {
    Incident {
        id: IncidentId(id),
        title: format!("incident {id}"),
        description: format!("details {id}"),
        severity,
        reported_at,
    }
}

fn ids(incidents: &[Incident]) -> Vec<u64> {
    incidents.iter().map(|i| i.id.0).collect()
}

fn mixed() -> IncidentCollection {
    IncidentCollection::from_incidents(vec![
        incident(1, Severity::Medium, datetime!(2025-03-15 10:00:00 UTC)),
        incident(2, Severity::High, datetime!(2025-04-01 14:30:00 UTC)),
        incident(3, Severity::Low, datetime!(2025-03-20 09:15:00 UTC)),
        incident(4, Severity::High, datetime!(2025-02-01 08:00:00 UTC)),
        incident(5, Severity::Low, datetime!(2025-05-05 12:00:00 UTC)),
    ])
}

// =============================================================
// Sorting
// =============================================================

#[test]
fn newest_sorts_descending() {
    let view = derive(&mixed(), SeverityFilter::All, SortOrder::Newest);
    assert_eq!(ids(&view), [5, 2, 3, 1, 4]);
}

#[test]
fn oldest_sorts_ascending() {
    let view = derive(&mixed(), SeverityFilter::All, SortOrder::Oldest);
    assert_eq!(ids(&view), [4, 1, 3, 2, 5]);
}

#[test]
fn newest_reversed_equals_oldest_without_ties() {
    let collection = mixed();
    let mut newest = derive(&collection, SeverityFilter::All, SortOrder::Newest);
    newest.reverse();
    assert_eq!(newest, derive(&collection, SeverityFilter::All, SortOrder::Oldest));
}

#[test]
fn equal_timestamps_keep_insertion_order_both_ways() {
    let at = datetime!(2025-03-01 00:00:00 UTC);
    let collection = IncidentCollection::from_incidents(vec![
        incident(1, Severity::Low, at),
        incident(2, Severity::High, datetime!(2025-04-01 00:00:00 UTC)),
        incident(3, Severity::Low, at),
        incident(4, Severity::Medium, at),
    ]);
    assert_eq!(ids(&derive(&collection, SeverityFilter::All, SortOrder::Newest)), [2, 1, 3, 4]);
    assert_eq!(ids(&derive(&collection, SeverityFilter::All, SortOrder::Oldest)), [1, 3, 4, 2]);
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn filter_all_keeps_every_member() {
    let collection = mixed();
    let mut view = ids(&derive(&collection, SeverityFilter::All, SortOrder::Newest));
    view.sort_unstable();
    assert_eq!(view, [1, 2, 3, 4, 5]);
}

#[test]
fn filter_high_keeps_only_high() {
    let view = derive(&mixed(), SeverityFilter::Only(Severity::High), SortOrder::Oldest);
    assert!(view.iter().all(|i| i.severity == Severity::High));
    assert_eq!(ids(&view), [4, 2]);
}

#[test]
fn severity_filters_partition_collection() {
    let collection = mixed();
    let mut union: Vec<u64> = Severity::ALL
        .iter()
        .flat_map(|s| ids(&derive(&collection, SeverityFilter::Only(*s), SortOrder::Newest)))
        .collect();
    let total = union.len();
    union.sort_unstable();
    union.dedup();
    assert_eq!(total, collection.len());
    assert_eq!(union, [1, 2, 3, 4, 5]);
}

#[test]
fn filter_without_matches_is_empty() {
    let collection = IncidentCollection::from_incidents(vec![incident(1, Severity::Low, OffsetDateTime::UNIX_EPOCH)]);
    assert!(derive(&collection, SeverityFilter::Only(Severity::High), SortOrder::Newest).is_empty());
    assert!(derive(&IncidentCollection::new(), SeverityFilter::All, SortOrder::Oldest).is_empty());
}

// =============================================================
// Purity
// =============================================================

#[test]
fn derive_is_repeatable_and_leaves_input_untouched() {
    let collection = mixed();
    let before = collection.clone();
    let first = derive(&collection, SeverityFilter::Only(Severity::Low), SortOrder::Newest);
    let second = derive(&collection, SeverityFilter::Only(Severity::Low), SortOrder::Newest);
    assert_eq!(first, second);
    assert_eq!(collection, before);
    assert_eq!(ids(collection.as_slice()), [1, 2, 3, 4, 5]);
}

// =============================================================
// Counts
// =============================================================

#[test]
fn severity_counts_tally_each_bucket() {
    let counts = severity_counts(&mixed());
    assert_eq!(counts, SeverityCounts { low: 2, medium: 1, high: 2 });
    assert_eq!(counts.total(), 5);
    assert_eq!(counts.for_filter(SeverityFilter::All), 5);
    assert_eq!(counts.for_filter(SeverityFilter::Only(Severity::Medium)), 1);
}
