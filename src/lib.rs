//! # incident-board
//!
//! View-model for the AI safety incident dashboard.
//!
//! This crate is UI-framework agnostic: it owns the incident collection, the
//! submission draft and the filter/sort/expand selection, and exposes pure
//! derivation helpers so the `client` crate only has to render.
//!
//! ARCHITECTURE
//! ============
//! Leaf modules (`incident`, `collection`, `draft`, `selection`, `view`) hold
//! data shapes and pure transformations. `board` composes them into the one
//! state owner that presentation code talks to.

pub mod board;
pub mod collection;
pub mod draft;
pub mod error;
pub mod incident;
pub mod selection;
pub mod view;

pub use board::IncidentBoard;
pub use collection::IncidentCollection;
pub use draft::{Draft, DraftField, DraftFieldName, IncidentInput, ParseDraftFieldError, validate_draft};
pub use error::ValidationError;
pub use incident::{Incident, IncidentId, Severity, SeverityFilter, SortOrder};
pub use selection::toggle_expand;
pub use view::{SeverityCounts, derive, severity_counts};
