/**
 * Router Configuration
 *
 * This module assembles the full Axum router: the API routes with the
 * admin gate on every mutating verb, request tracing, CORS for the
 * separately-hosted front end, and a JSON 404 fallback.
 */

use axum::http::StatusCode;
use axum::response::Json;
use axum::Router;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the router with all routes configured
pub fn create_router(state: AppState) -> Router {
    configure_api_routes(&state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .fallback(|| async { (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" }))) })
        .with_state(state)
}
