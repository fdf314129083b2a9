use axum::{
    response::Html,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod pizzas;
pub mod restaurant_pizzas;
pub mod restaurants;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

pub async fn index() -> Html<&'static str> {
    Html("<h1>Code challenge</h1>")
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the application router: resource routes, health, docs, CORS and tracing.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let resources = Router::new()
        .route("/restaurants", get(restaurants::list_restaurants))
        .route(
            "/restaurants/:id",
            get(restaurants::get_restaurant).delete(restaurants::delete_restaurant),
        )
        .route("/pizzas", get(pizzas::list_pizzas))
        .route("/restaurant_pizzas", post(restaurant_pizzas::create_restaurant_pizza));

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(resources)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx 以 ERROR 记录
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
