use axum::{extract::State, Json};
use tracing::error;

use service::pizza_service;

use crate::errors::ApiError;
use crate::state::AppState;
use crate::views::PizzaSummary;

#[utoipa::path(get, path = "/pizzas", tag = "pizzas", responses((status = 200, body = [PizzaSummary])))]
pub async fn list_pizzas(State(state): State<AppState>) -> Result<Json<Vec<PizzaSummary>>, ApiError> {
    let rows = pizza_service::list_pizzas(&state.db).await.map_err(|e| {
        error!(err = %e, "list pizzas failed");
        ApiError::Internal("An error occurred while loading pizzas")
    })?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}
