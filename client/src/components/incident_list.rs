//! Derived incident list with an empty state.

use incident_board::IncidentBoard;
use leptos::prelude::*;

use crate::components::incident_card::IncidentCard;

/// Renders the board's current filtered and sorted view.
#[component]
pub fn IncidentList() -> impl IntoView {
    let board = expect_context::<RwSignal<IncidentBoard>>();
    let incidents = Memo::new(move |_| board.with(IncidentBoard::view));

    view! {
        <div class="incidents-list">
            <Show
                when=move || incidents.with(|list| !list.is_empty())
                fallback=|| {
                    view! {
                        <div class="empty-state">
                            <div class="empty-icon">"📭"</div>
                            <h3>"No incidents found"</h3>
                            <p>"Try adjusting your filters or report a new incident"</p>
                        </div>
                    }
                }
            >
                <For
                    each=move || incidents.get()
                    key=|incident| incident.id
                    children=|incident| view! { <IncidentCard incident=incident/> }
                />
            </Show>
        </div>
    }
}
