//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host has no data API: it server-renders the Leptos dashboard, serves
//! the compiled WASM/JS bundle under `/pkg`, and answers `/healthz`.


use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::ServeError;

/// Leptos SSR frontend plus static assets and the health probe.
///
/// # Errors
///
/// Returns an error if the Leptos options cannot be read from the `LEPTOS_*`
/// environment variables (exported by cargo-leptos from the workspace
/// `[[workspace.metadata.leptos]]` table), e.g. a malformed `LEPTOS_SITE_ADDR`.
pub fn app() -> Result<Router, ServeError> {
    let conf = get_configuration(None).map_err(|e| ServeError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
