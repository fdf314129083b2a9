use utoipa::OpenApi;
use utoipa::ToSchema;

use crate::routes::restaurant_pizzas::CreateRestaurantPizzaInput;
use crate::views::{PizzaSummary, RestaurantPizzaCreated, RestaurantPizzaEntry, RestaurantSummary, RestaurantWithPizzas};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// 404 body.
#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

/// 400 and 500 body.
#[derive(ToSchema)]
pub struct ErrorsDoc { pub errors: Vec<String> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::restaurants::list_restaurants,
        crate::routes::restaurants::get_restaurant,
        crate::routes::restaurants::delete_restaurant,
        crate::routes::pizzas::list_pizzas,
        crate::routes::restaurant_pizzas::create_restaurant_pizza,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            ErrorsDoc,
            RestaurantSummary,
            PizzaSummary,
            RestaurantPizzaEntry,
            RestaurantWithPizzas,
            RestaurantPizzaCreated,
            CreateRestaurantPizzaInput,
        )
    ),
    tags(
        (name = "health"),
        (name = "restaurants"),
        (name = "pizzas"),
        (name = "restaurant_pizzas")
    )
)]
pub struct ApiDoc;
