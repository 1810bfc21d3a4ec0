//! Report form for a new incident.
//!
//! DESIGN
//! ======
//! Inputs are controlled by the board's draft: every edit goes through
//! `IncidentBoard::set_draft_field`, and submit/cancel are board commands.
//! A rejected submit leaves the form open and surfaces through
//! `NoticeBanner`.

#[cfg(test)]
#[path = "incident_form_test.rs"]
mod incident_form_test;

use incident_board::{DraftField, DraftFieldName, IncidentBoard, Severity};
use leptos::prelude::*;

/// Map a named form input and its raw value to a draft edit.
///
/// Returns `None` for unknown input names or an unknown severity value.
pub(crate) fn draft_field_from_input(name: &str, value: &str) -> Option<DraftField> {
    match name.parse::<DraftFieldName>().ok()? {
        DraftFieldName::Title => Some(DraftField::Title(value.to_owned())),
        DraftFieldName::Description => Some(DraftField::Description(value.to_owned())),
        DraftFieldName::Severity => value.parse::<Severity>().ok().map(DraftField::Severity),
    }
}

fn apply_input(board: RwSignal<IncidentBoard>, name: DraftFieldName, value: &str) {
    match draft_field_from_input(name.as_str(), value) {
        Some(field) => board.update(|b| b.set_draft_field(field)),
        None => tracing::warn!(field = %name, value, "ignored unrecognized form input"),
    }
}

/// The "Report New Safety Incident" form.
#[component]
pub fn IncidentForm() -> impl IntoView {
    let board = expect_context::<RwSignal<IncidentBoard>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut result = None;
        board.update(|b| result = Some(b.submit_draft()));
        if let Some(Ok(incident)) = result {
            tracing::debug!(incident_id = %incident.id, "report form submitted");
        }
    };

    let severity_options = Severity::ALL
        .into_iter()
        .map(|severity| {
            view! {
                <label class="severity-option">
                    <input
                        type="radio"
                        name=DraftFieldName::Severity.as_str()
                        value=severity.label()
                        prop:checked=move || board.with(|b| b.draft().severity == severity)
                        on:change=move |ev| apply_input(board, DraftFieldName::Severity, &event_target_value(&ev))
                    />
                    <span class=format!("severity-tag {}", severity.slug())>{severity.label()}</span>
                </label>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="form-container">
            <form class="incident-form" on:submit=on_submit>
                <h2 class="form-title">"Report New Safety Incident"</h2>

                <div class="form-group">
                    <label class="form-label">
                        "Incident Title " <span class="required">"*"</span>
                        <input
                            type="text"
                            class="form-input"
                            name=DraftFieldName::Title.as_str()
                            placeholder="Briefly describe the incident"
                            aria-required="true"
                            prop:value=move || board.with(|b| b.draft().title.clone())
                            on:input=move |ev| apply_input(board, DraftFieldName::Title, &event_target_value(&ev))
                        />
                    </label>
                </div>

                <div class="form-group">
                    <label class="form-label">
                        "Description " <span class="required">"*"</span>
                        <textarea
                            class="form-textarea"
                            name=DraftFieldName::Description.as_str()
                            rows="5"
                            placeholder="Provide detailed information about what happened, potential impact, and steps to reproduce"
                            aria-required="true"
                            prop:value=move || board.with(|b| b.draft().description.clone())
                            on:input=move |ev| {
                                apply_input(board, DraftFieldName::Description, &event_target_value(&ev));
                            }
                        ></textarea>
                    </label>
                </div>

                <div class="form-group">
                    <span class="form-label">"Severity Level"</span>
                    <div class="severity-options" role="radiogroup">{severity_options}</div>
                </div>

                <div class="form-actions">
                    <button type="submit" class="submit-btn">
                        "Submit Incident Report"
                    </button>
                    <button
                        type="button"
                        class="cancel-btn"
                        on:click=move |_| board.update(IncidentBoard::cancel_draft)
                    >
                        "Cancel"
                    </button>
                </div>
            </form>
        </div>
    }
}
