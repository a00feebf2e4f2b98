use axum::{
    middleware,
    routing::{get, patch, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::guard;
use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod auth;
pub mod bookings;
pub mod services;

/// Liveness probe kept as a bare text response.
#[utoipa::path(get, path = "/", tag = "health",
    responses((status = 200, description = "Liveness text")))]
pub async fn root() -> &'static str {
    "Fixify marketplace server is running..."
}

#[utoipa::path(get, path = "/health", tag = "health",
    responses((status = 200, description = "Health status")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: public routes, the protected
/// resource routes behind the credential guard, and the API docs.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/services", get(services::list_services))
        .route("/jwt", post(auth::issue_token))
        .route("/logout", post(auth::logout).get(auth::logout));

    let protected = Router::new()
        .route("/services/:id", get(services::get_service))
        .route("/add-service", post(services::add_service))
        .route("/add-booking", post(bookings::add_booking))
        .route("/bookings", get(bookings::my_bookings))
        .route("/manage-services", get(services::manage_services))
        .route(
            "/manage-services/:id",
            patch(services::update_service).delete(services::delete_service),
        )
        .route("/services-to-do", get(bookings::provider_todo))
        .route("/services-to-do/:id", put(bookings::update_booking_status))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            guard::require_token,
        ));

    public
        .merge(protected)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
