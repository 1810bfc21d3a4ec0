//! Card for one incident with an expandable detail section.

#[cfg(test)]
#[path = "incident_card_test.rs"]
mod incident_card_test;

use incident_board::{Incident, IncidentBoard, Severity};
use leptos::prelude::*;

/// CSS classes for a card, e.g. `incident-card high expanded`.
pub(crate) fn card_class(severity: Severity, expanded: bool) -> String {
    if expanded {
        format!("incident-card {} expanded", severity.slug())
    } else {
        format!("incident-card {}", severity.slug())
    }
}

/// Label and arrow of the detail toggle button.
pub(crate) fn details_toggle_content(expanded: bool) -> (&'static str, &'static str) {
    if expanded { ("Hide Details", "▲") } else { ("View Details", "▼") }
}

/// A single incident. Expansion state is read from the board so that only
/// one card is open at a time.
#[component]
pub fn IncidentCard(incident: Incident) -> impl IntoView {
    let board = expect_context::<RwSignal<IncidentBoard>>();
    let id = incident.id;
    let severity = incident.severity;
    let expanded = move || board.with(|b| b.is_expanded(id));
    let reported = incident.reported_label();
    let Incident { title, description, .. } = incident;

    view! {
        <div class=move || card_class(severity, expanded())>
            <div class="incident-header">
                <div class="incident-meta">
                    <span class=format!("severity-badge {}", severity.slug())>{severity.label()}</span>
                    <span class="incident-date">{reported}</span>
                </div>
                <h3 class="incident-title">{title}</h3>
            </div>

            <button
                class="toggle-details-btn"
                aria-expanded=move || expanded().to_string()
                aria-controls=format!("incident-details-{id}")
                on:click=move |_| board.update(|b| b.toggle_expand(id))
            >
                {move || details_toggle_content(expanded()).0}
                <span class="toggle-icon">{move || details_toggle_content(expanded()).1}</span>
            </button>

            <Show when=expanded>
                <div class="incident-details" id=format!("incident-details-{id}")>
                    <p class="incident-description">{description.clone()}</p>
                </div>
            </Show>
        </div>
    }
}
