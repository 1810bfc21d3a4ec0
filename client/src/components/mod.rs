//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render parts of the dashboard while reading and writing the
//! shared `RwSignal<IncidentBoard>` from the Leptos context provider.

pub mod controls_panel;
pub mod dashboard_header;
pub mod incident_card;
pub mod incident_form;
pub mod incident_list;
pub mod notice_banner;
