//! Dashboard header with the report/cancel toggle.

#[cfg(test)]
#[path = "dashboard_header_test.rs"]
mod dashboard_header_test;

use incident_board::IncidentBoard;
use leptos::prelude::*;

/// Icon and label of the header button for the current form visibility.
pub(crate) fn form_toggle_content(form_open: bool) -> (&'static str, &'static str) {
    if form_open { ("✕", "Cancel") } else { ("+", "Report Incident") }
}

/// Page header: title, subtitle, and the button that opens or cancels the
/// report form.
#[component]
pub fn DashboardHeader() -> impl IntoView {
    let board = expect_context::<RwSignal<IncidentBoard>>();
    let form_open = move || board.with(IncidentBoard::form_open);

    view! {
        <header class="dashboard-header">
            <div class="header-content">
                <h1>"🚨 AI Safety Incident Dashboard"</h1>
                <p class="subtitle">"Tracking and preventing AI-related risks"</p>
            </div>
            <div class="header-actions">
                <button
                    class="primary-btn"
                    class:cancel-btn=form_open
                    on:click=move |_| board.update(IncidentBoard::toggle_form)
                >
                    <span class="icon">{move || form_toggle_content(form_open()).0}</span>
                    " "
                    {move || form_toggle_content(form_open()).1}
                </button>
            </div>
        </header>
    }
}
