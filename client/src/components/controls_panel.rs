//! Severity filter and date sort controls.
//!
//! DESIGN
//! ======
//! Buttons are generated from `SeverityFilter::CHOICES` and
//! `SortOrder::CHOICES` so the panel cannot drift from the view-model enums.

#[cfg(test)]
#[path = "controls_panel_test.rs"]
mod controls_panel_test;

use incident_board::{IncidentBoard, SeverityFilter, SortOrder};
use leptos::prelude::*;

/// CSS classes for a filter button, e.g. `filter-btn high active`.
pub(crate) fn filter_button_class(filter: SeverityFilter, active: bool) -> String {
    let mut class = String::from("filter-btn");
    if let SeverityFilter::Only(severity) = filter {
        class.push(' ');
        class.push_str(severity.slug());
    }
    if active {
        class.push_str(" active");
    }
    class
}

pub(crate) fn sort_button_class(active: bool) -> &'static str {
    if active { "sort-btn active" } else { "sort-btn" }
}

/// Filter-by-severity and sort-by-date button groups.
#[component]
pub fn ControlsPanel() -> impl IntoView {
    let board = expect_context::<RwSignal<IncidentBoard>>();

    let filter_buttons = SeverityFilter::CHOICES
        .into_iter()
        .map(|choice| {
            let class = move || filter_button_class(choice, board.with(|b| b.filter() == choice));
            let count = move || board.with(|b| b.severity_counts().for_filter(choice));
            view! {
                <button
                    class=class
                    aria-pressed=move || board.with(|b| b.filter() == choice).to_string()
                    on:click=move |_| board.update(|b| b.set_filter(choice))
                >
                    {choice.label()}
                    <span class="filter-count">{count}</span>
                </button>
            }
        })
        .collect::<Vec<_>>();

    let sort_buttons = SortOrder::CHOICES
        .into_iter()
        .map(|order| {
            let class = move || sort_button_class(board.with(|b| b.sort_order() == order));
            view! {
                <button class=class on:click=move |_| board.update(|b| b.set_sort_order(order))>
                    {order.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="controls-panel">
            <div class="control-group">
                <label class="control-label">"Filter by Severity"</label>
                <div class="severity-filters">{filter_buttons}</div>
            </div>
            <div class="control-group">
                <label class="control-label">"Sort by Date"</label>
                <div class="sort-options">{sort_buttons}</div>
            </div>
        </div>
    }
}
