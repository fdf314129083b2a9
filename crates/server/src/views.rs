//! JSON shapes returned by the HTTP layer.
//!
//! Each view picks exactly the fields one endpoint exposes, so the nesting
//! never recurses back into the parent it came from.
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use models::{pizza, restaurant, restaurant_pizza};
use service::restaurant_pizza_service::CreatedRestaurantPizza;
use service::restaurant_service::{Offering, RestaurantDetail};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantSummary {
    pub id: i32,
    pub name: String,
    pub address: String,
}

impl From<restaurant::Model> for RestaurantSummary {
    fn from(m: restaurant::Model) -> Self {
        Self { id: m.id, name: m.name, address: m.address }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PizzaSummary {
    pub id: i32,
    pub name: String,
    pub ingredients: String,
}

impl From<pizza::Model> for PizzaSummary {
    fn from(m: pizza::Model) -> Self {
        Self { id: m.id, name: m.name, ingredients: m.ingredients }
    }
}

/// An offering as it appears inside a restaurant: pizza nested, no restaurant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantPizzaEntry {
    pub id: i32,
    pub price: i32,
    pub pizza_id: i32,
    pub restaurant_id: i32,
    pub pizza: PizzaSummary,
}

impl From<Offering> for RestaurantPizzaEntry {
    fn from(o: Offering) -> Self {
        let restaurant_pizza::Model { id, price, pizza_id, restaurant_id } = o.entry;
        Self { id, price, pizza_id, restaurant_id, pizza: o.pizza.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantWithPizzas {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<RestaurantPizzaEntry>,
}

impl From<RestaurantDetail> for RestaurantWithPizzas {
    fn from(d: RestaurantDetail) -> Self {
        Self {
            id: d.restaurant.id,
            name: d.restaurant.name,
            address: d.restaurant.address,
            restaurant_pizzas: d.offerings.into_iter().map(Into::into).collect(),
        }
    }
}

/// Body of a successful `POST /restaurant_pizzas`: both parents nested.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantPizzaCreated {
    pub id: i32,
    pub price: i32,
    pub pizza_id: i32,
    pub restaurant_id: i32,
    pub pizza: PizzaSummary,
    pub restaurant: RestaurantSummary,
}

impl From<CreatedRestaurantPizza> for RestaurantPizzaCreated {
    fn from(c: CreatedRestaurantPizza) -> Self {
        let restaurant_pizza::Model { id, price, pizza_id, restaurant_id } = c.entry;
        Self {
            id,
            price,
            pizza_id,
            restaurant_id,
            pizza: c.pizza.into(),
            restaurant: c.restaurant.into(),
        }
    }
}
