//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the health probe with Leptos SSR rendering under a
//! single Axum router and serves the compiled WASM/JS/CSS bundle from `/pkg`.
//! The dashboard has no data API; every table ships inside the bundle.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

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

/// Routes served alongside the Leptos app.
pub fn api_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full application router for `options`.
pub fn app(options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&options, routes, {
            let opts = options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(options.clone());

    // Compiled assets live under the site root's /pkg directory.
    let site_root_path = PathBuf::from(options.site_root.as_ref());

    api_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join(options.site_pkg_dir.as_ref())))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// Load Leptos settings and build the router.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn leptos_app() -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::LeptosConfig(e.to_string()))?;
    Ok(app(conf.leptos_options))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
