use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{errors, restaurant, restaurant_pizza};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pizzas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub ingredients: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    RestaurantPizza,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::RestaurantPizza => Entity::has_many(restaurant_pizza::Entity).into(),
        }
    }
}

impl Related<restaurant_pizza::Entity> for Entity {
    fn to() -> RelationDef { Relation::RestaurantPizza.def() }
}

/// Restaurants offering a pizza, reached through `restaurant_pizzas`.
impl Related<restaurant::Entity> for Entity {
    fn to() -> RelationDef { restaurant_pizza::Relation::Restaurant.def() }

    fn via() -> Option<RelationDef> { Some(restaurant_pizza::Relation::Pizza.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create<C: ConnectionTrait>(db: &C, name: &str, ingredients: &str) -> Result<Model, errors::ModelError> {
    if name.trim().is_empty() { return Err(errors::ModelError::Validation("name required".into())); }
    if ingredients.trim().is_empty() { return Err(errors::ModelError::Validation("ingredients required".into())); }
    let am = ActiveModel {
        name: Set(name.to_string()),
        ingredients: Set(ingredients.to_string()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
