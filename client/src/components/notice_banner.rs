//! Non-blocking notice for a rejected submission.

use incident_board::IncidentBoard;
use leptos::prelude::*;

/// Shows the board's current validation notice until dismissed.
#[component]
pub fn NoticeBanner() -> impl IntoView {
    let board = expect_context::<RwSignal<IncidentBoard>>();
    let notice = move || board.with(IncidentBoard::notice);

    view! {
        <Show when=move || notice().is_some()>
            <div class="notice-banner" role="alert">
                <span class="notice-banner__message">
                    {move || notice().map(|err| err.to_string()).unwrap_or_default()}
                </span>
                <button
                    class="notice-banner__dismiss"
                    title="Dismiss"
                    aria-label="Dismiss"
                    on:click=move |_| board.update(IncidentBoard::dismiss_notice)
                >
                    "✕"
                </button>
            </div>
        </Show>
    }
}
