use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::{error, warn};
use utoipa::ToSchema;

use models::{errors::ModelError, restaurant_pizza};
use service::errors::ServiceError;
use service::restaurant_pizza_service::{self, NewRestaurantPizza};

use crate::errors::{ApiError, CREATE_RESTAURANT_PIZZA_FAILED};
use crate::state::AppState;
use crate::views::RestaurantPizzaCreated;

/// Every field is optional so a missing one maps to the right 400 body
/// instead of a generic deserialization rejection. Ids stay raw JSON until
/// validation so a malformed id reads as an unknown reference.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRestaurantPizzaInput {
    pub price: Option<i64>,
    #[schema(value_type = Option<i32>)]
    pub pizza_id: Option<Value>,
    #[schema(value_type = Option<i32>)]
    pub restaurant_id: Option<Value>,
}

fn record_id(raw: Option<&Value>) -> Option<i32> {
    raw.and_then(Value::as_i64).and_then(|id| i32::try_from(id).ok())
}

impl CreateRestaurantPizzaInput {
    /// Price is checked before the ids.
    fn validate(self) -> Result<NewRestaurantPizza, ApiError> {
        let price = self
            .price
            .filter(|p| restaurant_pizza::price_in_range(*p))
            .ok_or_else(ApiError::validation)?;
        match (record_id(self.pizza_id.as_ref()), record_id(self.restaurant_id.as_ref())) {
            (Some(pizza_id), Some(restaurant_id)) => Ok(NewRestaurantPizza { price, pizza_id, restaurant_id }),
            _ => Err(ApiError::invalid_reference()),
        }
    }
}

#[utoipa::path(
    post,
    path = "/restaurant_pizzas",
    tag = "restaurant_pizzas",
    request_body = CreateRestaurantPizzaInput,
    responses(
        (status = 201, body = RestaurantPizzaCreated),
        (status = 400, description = "validation errors, or unknown pizza or restaurant"),
        (status = 500, description = "Create failed, nothing stored")
    )
)]
pub async fn create_restaurant_pizza(
    State(state): State<AppState>,
    payload: Result<Json<CreateRestaurantPizzaInput>, JsonRejection>,
) -> Result<(StatusCode, Json<RestaurantPizzaCreated>), ApiError> {
    let Json(input) = payload.map_err(|rejection| {
        warn!(reason = %rejection.body_text(), "rejected restaurant pizza payload");
        ApiError::validation()
    })?;
    let input = input.validate()?;

    match restaurant_pizza_service::create_restaurant_pizza(&state.db, input).await {
        Ok(created) => Ok((StatusCode::CREATED, Json(created.into()))),
        Err(ServiceError::Validation(_)) | Err(ServiceError::Model(ModelError::Validation(_))) => {
            Err(ApiError::validation())
        }
        Err(ServiceError::NotFound(_)) => Err(ApiError::invalid_reference()),
        Err(e) => {
            error!(err = %e, "create restaurant pizza failed");
            Err(ApiError::Internal(CREATE_RESTAURANT_PIZZA_FAILED))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(price: Option<i64>, pizza_id: Option<Value>, restaurant_id: Option<Value>) -> CreateRestaurantPizzaInput {
        CreateRestaurantPizzaInput { price, pizza_id, restaurant_id }
    }

    #[test]
    fn price_checked_before_ids() {
        let err = input(None, None, None).validate().unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        let err = input(Some(31), None, Some(json!(1))).validate().unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        let err = input(Some(0), Some(json!("x")), Some(json!(1))).validate().unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn missing_id_is_invalid_reference() {
        let err = input(Some(5), Some(json!(1)), None).validate().unwrap_err();
        assert!(matches!(err, ApiError::InvalidReference(_)));
        let err = input(Some(5), None, Some(json!(1))).validate().unwrap_err();
        assert!(matches!(err, ApiError::InvalidReference(_)));
    }

    #[test]
    fn malformed_id_is_invalid_reference() {
        for bad in [json!("x"), json!(3_000_000_000_i64), json!(1.5), json!(null), json!([1])] {
            let err = input(Some(5), Some(bad.clone()), Some(json!(1))).validate().unwrap_err();
            assert!(matches!(err, ApiError::InvalidReference(_)), "{bad}");
        }
    }

    #[test]
    fn complete_input_passes() {
        let ok = input(Some(30), Some(json!(2)), Some(json!(3))).validate().unwrap();
        assert_eq!((ok.price, ok.pizza_id, ok.restaurant_id), (30, 2, 3));
    }
}
