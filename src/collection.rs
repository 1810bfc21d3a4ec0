//! Insertion-ordered incident store.
//!
//! DESIGN
//! ======
//! Ids come from a monotonic counter owned by the store rather than a scan
//! for the current maximum. The counter is advanced to `id + 1` on every
//! insert, so it always equals `max(ids) + 1` and an id is never handed out
//! twice even if removal is added later.

#[cfg(test)]
#[path = "collection_test.rs"]
mod collection_test;

use time::OffsetDateTime;
use time::macros::datetime;

use crate::draft::IncidentInput;
use crate::incident::{Incident, IncidentId, Severity};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IncidentCollection {
    incidents: Vec<Incident>,
    next_id: u64,
}

impl IncidentCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from existing records, keeping their ids and order.
    /// A record whose id is already present, or whose id leaves no successor
    /// for the counter (`u64::MAX`), is dropped.
    #[must_use]
    pub fn from_incidents(incidents: Vec<Incident>) -> Self {
        let mut collection = Self::new();
        for incident in incidents {
            if collection.get(incident.id).is_some() {
                tracing::warn!(incident_id = %incident.id, "duplicate incident id dropped");
                continue;
            }
            if incident.id.0.checked_add(1).is_none() {
                tracing::warn!(incident_id = %incident.id, "incident id out of range dropped");
                continue;
            }
            collection.insert(incident);
        }
        collection
    }

    /// The three incidents the dashboard opens with.
    #[must_use]
    pub fn seeded() -> Self {
        Self::from_incidents(vec![
            Incident {
                id: IncidentId(1),
                title: "Biased Recommendation Algorithm".into(),
                description: "Algorithm consistently favored certain demographics in job recommendations, potentially violating equal opportunity regulations.".into(),
                severity: Severity::Medium,
                reported_at: datetime!(2025-03-15 10:00:00 UTC),
            },
            Incident {
                id: IncidentId(2),
                title: "LLM Hallucination in Critical Info".into(),
                description: "Language model provided incorrect medical treatment information that could have led to patient harm if not caught by human review.".into(),
                severity: Severity::High,
                reported_at: datetime!(2025-04-01 14:30:00 UTC),
            },
            Incident {
                id: IncidentId(3),
                title: "Minor Data Leak via Chatbot".into(),
                description: "Chatbot inadvertently exposed non-sensitive user metadata through API response headers.".into(),
                severity: Severity::Low,
                reported_at: datetime!(2025-03-20 09:15:00 UTC),
            },
        ])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.incidents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.incidents.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Incident> {
        self.incidents.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Incident] {
        &self.incidents
    }

    #[must_use]
    pub fn get(&self, id: IncidentId) -> Option<&Incident> {
        self.incidents.iter().find(|i| i.id == id)
    }

    /// Id the next appended incident will receive.
    #[must_use]
    pub fn next_id(&self) -> IncidentId {
        IncidentId(self.next_id.max(1))
    }

    /// Append a validated incident reported now.
    pub fn append(&mut self, input: IncidentInput) -> Incident {
        self.append_at(input, OffsetDateTime::now_utc())
    }

    /// Append a validated incident with an explicit report time.
    pub fn append_at(&mut self, input: IncidentInput, reported_at: OffsetDateTime) -> Incident {
        let incident = Incident {
            id: self.next_id(),
            title: input.title,
            description: input.description,
            severity: input.severity,
            reported_at,
        };
        self.insert(incident.clone());
        incident
    }

    fn insert(&mut self, incident: Incident) {
        self.next_id = self.next_id.max(incident.id.0.saturating_add(1));
        self.incidents.push(incident);
    }
}

impl<'a> IntoIterator for &'a IncidentCollection {
    type Item = &'a Incident;
    type IntoIter = std::slice::Iter<'a, Incident>;

    fn into_iter(self) -> Self::IntoIter {
        self.incidents.iter()
    }
}
