//! Dashboard page: the single screen of the incident tracker.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It lays out the header, the filter/sort controls,
//! the submission form and the incident list; each part reads the board from
//! context on its own.

use incident_board::IncidentBoard;
use leptos::prelude::*;

use crate::components::controls_panel::ControlsPanel;
use crate::components::dashboard_header::DashboardHeader;
use crate::components::incident_form::IncidentForm;
use crate::components::incident_list::IncidentList;
use crate::components::notice_banner::NoticeBanner;

/// Dashboard page with the controls, the optional report form and the incident list.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let board = expect_context::<RwSignal<IncidentBoard>>();

    view! {
        <div class="dashboard">
            <DashboardHeader/>
            <div class="dashboard-content">
                <ControlsPanel/>
                <NoticeBanner/>
                <Show when=move || board.with(IncidentBoard::form_open)>
                    <IncidentForm/>
                </Show>
                <IncidentList/>
            </div>
        </div>
    }
}
