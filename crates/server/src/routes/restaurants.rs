use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::error;

use service::restaurant_service;

use crate::errors::ApiError;
use crate::state::AppState;
use crate::views::{RestaurantSummary, RestaurantWithPizzas};

/// Ids that do not parse as an integer cannot name a restaurant.
fn restaurant_id(path: Result<Path<i32>, PathRejection>) -> Result<i32, ApiError> {
    path.map(|Path(id)| id).map_err(|_| ApiError::restaurant_not_found())
}

#[utoipa::path(
    get,
    path = "/restaurants",
    tag = "restaurants",
    responses((status = 200, body = [RestaurantSummary]))
)]
pub async fn list_restaurants(State(state): State<AppState>) -> Result<Json<Vec<RestaurantSummary>>, ApiError> {
    let rows = restaurant_service::list_restaurants(&state.db).await.map_err(|e| {
        error!(err = %e, "list restaurants failed");
        ApiError::Internal("An error occurred while loading restaurants")
    })?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/restaurants/{id}",
    tag = "restaurants",
    params(("id" = i32, Path, description = "Restaurant id")),
    responses(
        (status = 200, body = RestaurantWithPizzas),
        (status = 404, description = "Restaurant not found")
    )
)]
pub async fn get_restaurant(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<RestaurantWithPizzas>, ApiError> {
    let id = restaurant_id(path)?;
    let detail = restaurant_service::get_restaurant_detail(&state.db, id).await.map_err(|e| {
        error!(restaurant_id = id, err = %e, "load restaurant failed");
        ApiError::Internal("An error occurred while loading the restaurant")
    })?;
    detail.map(|d| Json(d.into())).ok_or_else(ApiError::restaurant_not_found)
}

#[utoipa::path(
    delete,
    path = "/restaurants/{id}",
    tag = "restaurants",
    params(("id" = i32, Path, description = "Restaurant id")),
    responses(
        (status = 204, description = "Restaurant and its restaurant pizzas deleted"),
        (status = 404, description = "Restaurant not found")
    )
)]
pub async fn delete_restaurant(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = restaurant_id(path)?;
    let deleted = restaurant_service::delete_restaurant(&state.db, id).await.map_err(|e| {
        error!(restaurant_id = id, err = %e, "delete restaurant failed");
        ApiError::Internal("An error occurred while deleting the restaurant")
    })?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::restaurant_not_found())
    }
}
