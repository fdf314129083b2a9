use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use tracing::{info, instrument};

use models::{pizza, restaurant, restaurant_pizza};
use crate::errors::ServiceError;

/// List all pizzas, flat.
pub async fn list_pizzas(db: &DatabaseConnection) -> Result<Vec<pizza::Model>, ServiceError> {
    pizza::Entity::find()
        .order_by_asc(pizza::Column::Id)
        .all(db)
        .await
        .map_err(ServiceError::db)
}

/// Get pizza by id.
pub async fn get_pizza(db: &DatabaseConnection, id: i32) -> Result<Option<pizza::Model>, ServiceError> {
    pizza::Entity::find_by_id(id).one(db).await.map_err(ServiceError::db)
}

/// Restaurants offering a pizza; `None` when the id has no row.
pub async fn restaurants_for_pizza(db: &DatabaseConnection, id: i32) -> Result<Option<Vec<restaurant::Model>>, ServiceError> {
    let Some(pizza) = get_pizza(db, id).await? else { return Ok(None) };
    let restaurants = pizza
        .find_related(restaurant::Entity)
        .order_by_asc(restaurant::Column::Id)
        .all(db)
        .await
        .map_err(ServiceError::db)?;
    Ok(Some(restaurants))
}

/// Delete a pizza and every offering of it; returns false if no such pizza.
#[instrument(skip(db))]
pub async fn delete_pizza(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let removed = db
        .transaction::<_, Option<u64>, ServiceError>(|txn| {
            Box::pin(async move {
                let Some(found) = pizza::Entity::find_by_id(id).one(txn).await.map_err(ServiceError::db)? else {
                    return Ok(None);
                };
                let children = restaurant_pizza::Entity::delete_many()
                    .filter(restaurant_pizza::Column::PizzaId.eq(found.id))
                    .exec(txn)
                    .await
                    .map_err(ServiceError::db)?;
                found.delete(txn).await.map_err(ServiceError::db)?;
                Ok(Some(children.rows_affected))
            })
        })
        .await?;

    match removed {
        Some(offerings) => {
            info!(pizza_id = id, offerings, "deleted pizza");
            Ok(true)
        }
        None => Ok(false),
    }
}
