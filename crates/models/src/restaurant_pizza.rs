//! Join record between a restaurant and a pizza, carrying the price.
//!
//! The price range is checked by [`validate_price`] wherever a request enters
//! and again by the `before_save` guard, so rows written through any
//! `ActiveModel` path keep `MIN_PRICE..=MAX_PRICE`.
use sea_orm::{entity::prelude::*, ActiveValue, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{errors, pizza, restaurant};

pub const MIN_PRICE: i64 = 1;
pub const MAX_PRICE: i64 = 30;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "restaurant_pizzas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub price: i32,
    pub restaurant_id: i32,
    pub pizza_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Restaurant,
    Pizza,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Restaurant => Entity::belongs_to(restaurant::Entity)
                .from(Column::RestaurantId)
                .to(restaurant::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
            Relation::Pizza => Entity::belongs_to(pizza::Entity)
                .from(Column::PizzaId)
                .to(pizza::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl Related<restaurant::Entity> for Entity {
    fn to() -> RelationDef { Relation::Restaurant.def() }
}

impl Related<pizza::Entity> for Entity {
    fn to() -> RelationDef { Relation::Pizza.def() }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(price) = &self.price {
            validate_price(i64::from(*price)).map_err(|e| DbErr::Custom(e.to_string()))?;
        }
        Ok(self)
    }
}

pub fn price_in_range(price: i64) -> bool {
    (MIN_PRICE..=MAX_PRICE).contains(&price)
}

/// Shared by the HTTP pre-check, the service and the persistence guard.
pub fn validate_price(price: i64) -> Result<i32, errors::ModelError> {
    if !price_in_range(price) {
        return Err(errors::ModelError::Validation(format!(
            "price must be between {MIN_PRICE} and {MAX_PRICE}"
        )));
    }
    // in range, so the narrowing cannot fail
    i32::try_from(price).map_err(|e| errors::ModelError::Validation(e.to_string()))
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    price: i64,
    pizza_id: i32,
    restaurant_id: i32,
) -> Result<Model, errors::ModelError> {
    let price = validate_price(price)?;
    let am = ActiveModel {
        price: Set(price),
        pizza_id: Set(pizza_id),
        restaurant_id: Set(restaurant_id),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
