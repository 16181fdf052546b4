//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server is only a delivery surface for the single Leptos page: SSR
//! routes generated from `client::app::App`, the compiled assets under
//! `/pkg`, and a liveness probe. There is no API.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::ServerError;

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Routes that do not depend on the Leptos site configuration.
pub fn service_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Load the Leptos site options.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section and no `LEPTOS_*` env).
pub fn leptos_options() -> Result<LeptosOptions, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::LeptosConfig(e.to_string()))?;
    Ok(conf.leptos_options)
}

/// Full application router: Leptos SSR, static assets, service routes.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // WASM, JS and the stylesheet are emitted into <site-root>/pkg.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    service_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new().gzip(true))
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
