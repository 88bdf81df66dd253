// src/routes.rs
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::auth::require_bearer;
use crate::handlers;
use crate::state::AppState;

/// Builds the gateway router. Pinning routes sit behind the bearer gate and
/// under `api_prefix` when one is configured; `/health` is open.
pub fn create_router(state: AppState, api_prefix: &str) -> Router {
    let pinning = Router::new()
        .route("/pins", post(handlers::create_pin))
        .route("/manifest/batch_upload", post(handlers::batch_upload))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_bearer));

    let app = Router::new().route("/health", get(handlers::health));
    let app = if api_prefix.is_empty() || api_prefix == "/" {
        app.merge(pinning)
    } else {
        app.nest(api_prefix, pinning)
    };

    app.with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
