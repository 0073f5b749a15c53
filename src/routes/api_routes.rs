/**
 * API Route Handlers
 *
 * This module defines the API route table. The authorization requirement
 * is a single declarative policy applied here at registration time: every
 * mutating verb on every resource - including password change and the
 * upload relay - is wrapped in the admin gate, and no handler carries its
 * own check. Read-only routes and login stay public.
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /api/login` - admin login (public)
 * - `POST /api/change-password` - credential rotation (token)
 *
 * ## Content
 * - `GET/POST/PUT/DELETE /api/articles`
 * - `GET/POST/PUT/DELETE /api/services`
 * - `GET/POST/PUT/DELETE /api/before-after-gallery`
 * - `GET/POST/PUT/DELETE /api/animated-slider`
 * - `GET/POST/PUT/DELETE /api/sticky-scroll`
 * - `GET/POST/PUT/DELETE /api/sticky-scroll-reversed`
 * - `GET/PUT /api/site-content`
 *
 * GETs are public; every other verb requires a bearer token.
 *
 * ## Upload
 * - `POST /api/upload` - multipart relay to the blob store (token)
 */

use axum::handler::Handler;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;

use crate::auth::handlers::{change_password, login};
use crate::content::{articles, gallery, services, site_text, slider, sticky};
use crate::middleware::auth::require_admin;
use crate::server::state::AppState;
use crate::upload::handlers::upload_file;

/// Configure the API routes with the admin gate on mutating verbs
pub fn configure_api_routes(state: &AppState) -> Router<AppState> {
    let gate = middleware::from_fn_with_state(state.clone(), require_admin);

    Router::new()
        .route("/api/login", post(login))
        .route(
            "/api/change-password",
            post(change_password.layer(gate.clone())),
        )
        .route("/api/upload", post(upload_file.layer(gate.clone())))
        .route(
            "/api/articles",
            get(articles::list)
                .post(articles::create.layer(gate.clone()))
                .put(articles::update.layer(gate.clone()))
                .delete(articles::remove.layer(gate.clone())),
        )
        .route(
            "/api/services",
            get(services::list)
                .post(services::create.layer(gate.clone()))
                .put(services::update.layer(gate.clone()))
                .delete(services::remove.layer(gate.clone())),
        )
        .route(
            "/api/before-after-gallery",
            get(gallery::list)
                .post(gallery::create.layer(gate.clone()))
                .put(gallery::update.layer(gate.clone()))
                .delete(gallery::remove.layer(gate.clone())),
        )
        .route(
            "/api/animated-slider",
            get(slider::section)
                .post(slider::create.layer(gate.clone()))
                .put(slider::update.layer(gate.clone()))
                .delete(slider::remove.layer(gate.clone())),
        )
        .route(
            "/api/sticky-scroll",
            get(sticky::list_standard)
                .post(sticky::create_standard.layer(gate.clone()))
                .put(sticky::update_standard.layer(gate.clone()))
                .delete(sticky::remove_standard.layer(gate.clone())),
        )
        .route(
            "/api/sticky-scroll-reversed",
            get(sticky::list_reversed)
                .post(sticky::create_reversed.layer(gate.clone()))
                .put(sticky::update_reversed.layer(gate.clone()))
                .delete(sticky::remove_reversed.layer(gate.clone())),
        )
        .route(
            "/api/site-content",
            get(site_text::list).put(site_text::upsert.layer(gate)),
        )
}
