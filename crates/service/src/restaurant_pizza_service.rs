use sea_orm::{DatabaseConnection, EntityTrait, TransactionTrait};
use tracing::{error, info, instrument};

use models::{errors::ModelError, pizza, restaurant, restaurant_pizza};
use crate::errors::ServiceError;

#[derive(Clone, Copy, Debug)]
pub struct NewRestaurantPizza {
    pub price: i64,
    pub pizza_id: i32,
    pub restaurant_id: i32,
}

/// The stored join row with both parents loaded.
#[derive(Clone, Debug, PartialEq)]
pub struct CreatedRestaurantPizza {
    pub entry: restaurant_pizza::Model,
    pub pizza: pizza::Model,
    pub restaurant: restaurant::Model,
}

/// Create a restaurant pizza.
///
/// Errors:
/// - `Validation` when the price is outside the allowed range
/// - `NotFound` when the pizza or the restaurant does not exist
/// - `Db` for anything the store rejects; the transaction is rolled back
#[instrument(skip(db))]
pub async fn create_restaurant_pizza(
    db: &DatabaseConnection,
    input: NewRestaurantPizza,
) -> Result<CreatedRestaurantPizza, ServiceError> {
    let price = restaurant_pizza::validate_price(input.price).map_err(|e| ServiceError::Validation(e.to_string()))?;

    let created = db
        .transaction::<_, CreatedRestaurantPizza, ServiceError>(|txn| {
            Box::pin(async move {
                let pizza = pizza::Entity::find_by_id(input.pizza_id).one(txn).await.map_err(ServiceError::db)?;
                let restaurant = restaurant::Entity::find_by_id(input.restaurant_id).one(txn).await.map_err(ServiceError::db)?;
                let (pizza, restaurant) = match (pizza, restaurant) {
                    (Some(p), Some(r)) => (p, r),
                    (None, _) => return Err(ServiceError::not_found("pizza")),
                    (_, None) => return Err(ServiceError::not_found("restaurant")),
                };
                let entry = restaurant_pizza::create(txn, i64::from(price), pizza.id, restaurant.id)
                    .await
                    .map_err(|e| match e {
                        ModelError::Validation(msg) => ServiceError::Validation(msg),
                        ModelError::Db(msg) => ServiceError::Db(msg),
                    })?;
                Ok(CreatedRestaurantPizza { entry, pizza, restaurant })
            })
        })
        .await
        .map_err(ServiceError::from)
        .inspect_err(|e| {
            if matches!(e, ServiceError::Db(_)) {
                error!(err = %e, "create restaurant pizza failed, rolled back");
            }
        })?;

    info!(id = created.entry.id, "created restaurant pizza");
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use sea_orm::PaginatorTrait;

    async fn seeded(db: &DatabaseConnection) -> Result<(restaurant::Model, pizza::Model), anyhow::Error> {
        let r = restaurant::create(db, "Karen's Pizza Shack", "address1").await?;
        let p = pizza::create(db, "Emma", "Dough, Tomato Sauce, Cheese").await?;
        Ok((r, p))
    }

    #[tokio::test]
    async fn creates_with_nested_parents() -> Result<(), anyhow::Error> {
        let t = get_db().await?;
        let (r, p) = seeded(&t.db).await?;

        let created = create_restaurant_pizza(&t.db, NewRestaurantPizza { price: 15, pizza_id: p.id, restaurant_id: r.id }).await?;
        assert!(created.entry.id > 0);
        assert_eq!(created.entry.price, 15);
        assert_eq!(created.entry.pizza_id, p.id);
        assert_eq!(created.entry.restaurant_id, r.id);
        assert_eq!(created.pizza, p);
        assert_eq!(created.restaurant, r);
        Ok(())
    }

    #[tokio::test]
    async fn price_bounds() -> Result<(), anyhow::Error> {
        let t = get_db().await?;
        let (r, p) = seeded(&t.db).await?;

        for price in [1, 30] {
            create_restaurant_pizza(&t.db, NewRestaurantPizza { price, pizza_id: p.id, restaurant_id: r.id }).await?;
        }
        for price in [0, 31] {
            let err = create_restaurant_pizza(&t.db, NewRestaurantPizza { price, pizza_id: p.id, restaurant_id: r.id })
                .await
                .unwrap_err();
            assert!(matches!(err, ServiceError::Validation(_)));
        }
        assert_eq!(restaurant_pizza::Entity::find().count(&t.db).await?, 2);
        Ok(())
    }

    #[tokio::test]
    async fn unknown_references_are_not_found() -> Result<(), anyhow::Error> {
        let t = get_db().await?;
        let (r, p) = seeded(&t.db).await?;

        let err = create_restaurant_pizza(&t.db, NewRestaurantPizza { price: 10, pizza_id: 999, restaurant_id: r.id })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m == "pizza not found"));

        let err = create_restaurant_pizza(&t.db, NewRestaurantPizza { price: 10, pizza_id: p.id, restaurant_id: 999 })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m == "restaurant not found"));

        assert_eq!(restaurant_pizza::Entity::find().count(&t.db).await?, 0);
        Ok(())
    }
}
