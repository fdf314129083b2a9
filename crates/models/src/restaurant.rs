use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{errors, pizza, restaurant_pizza};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "restaurants")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub address: String,
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

/// Pizzas offered by a restaurant, reached through `restaurant_pizzas`.
impl Related<pizza::Entity> for Entity {
    fn to() -> RelationDef { restaurant_pizza::Relation::Pizza.def() }

    fn via() -> Option<RelationDef> { Some(restaurant_pizza::Relation::Restaurant.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() { return Err(errors::ModelError::Validation("name required".into())); }
    Ok(())
}

pub fn validate_address(address: &str) -> Result<(), errors::ModelError> {
    if address.trim().is_empty() { return Err(errors::ModelError::Validation("address required".into())); }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(db: &C, name: &str, address: &str) -> Result<Model, errors::ModelError> {
    validate_name(name)?;
    validate_address(address)?;
    let am = ActiveModel {
        name: Set(name.to_string()),
        address: Set(address.to_string()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
