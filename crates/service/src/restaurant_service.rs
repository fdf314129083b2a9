use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use tracing::{info, instrument};

use models::{pizza, restaurant, restaurant_pizza};
use crate::errors::ServiceError;

/// One `restaurant_pizzas` row together with the pizza it points at.
#[derive(Clone, Debug, PartialEq)]
pub struct Offering {
    pub entry: restaurant_pizza::Model,
    pub pizza: pizza::Model,
}

/// A restaurant with every offering it owns, ordered by offering id.
#[derive(Clone, Debug, PartialEq)]
pub struct RestaurantDetail {
    pub restaurant: restaurant::Model,
    pub offerings: Vec<Offering>,
}

/// List all restaurants, flat.
pub async fn list_restaurants(db: &DatabaseConnection) -> Result<Vec<restaurant::Model>, ServiceError> {
    restaurant::Entity::find()
        .order_by_asc(restaurant::Column::Id)
        .all(db)
        .await
        .map_err(ServiceError::db)
}

/// Get restaurant by id.
pub async fn get_restaurant(db: &DatabaseConnection, id: i32) -> Result<Option<restaurant::Model>, ServiceError> {
    restaurant::Entity::find_by_id(id).one(db).await.map_err(ServiceError::db)
}

/// Restaurant plus its offerings; `None` when the id has no row.
pub async fn get_restaurant_detail(db: &DatabaseConnection, id: i32) -> Result<Option<RestaurantDetail>, ServiceError> {
    let Some(restaurant) = get_restaurant(db, id).await? else { return Ok(None) };
    let rows = restaurant
        .find_related(restaurant_pizza::Entity)
        .find_also_related(pizza::Entity)
        .order_by_asc(restaurant_pizza::Column::Id)
        .all(db)
        .await
        .map_err(ServiceError::db)?;
    // the pizza FK is NOT NULL, so every row has its pizza
    let offerings = rows
        .into_iter()
        .filter_map(|(entry, pizza)| pizza.map(|pizza| Offering { entry, pizza }))
        .collect();
    Ok(Some(RestaurantDetail { restaurant, offerings }))
}

/// Pizzas a restaurant offers, without the join rows; `None` when the id has no row.
pub async fn pizzas_for_restaurant(db: &DatabaseConnection, id: i32) -> Result<Option<Vec<pizza::Model>>, ServiceError> {
    let Some(restaurant) = get_restaurant(db, id).await? else { return Ok(None) };
    let pizzas = restaurant
        .find_related(pizza::Entity)
        .order_by_asc(pizza::Column::Id)
        .all(db)
        .await
        .map_err(ServiceError::db)?;
    Ok(Some(pizzas))
}

/// Delete a restaurant and its offerings atomically; returns false if no such restaurant.
#[instrument(skip(db))]
pub async fn delete_restaurant(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let removed = db
        .transaction::<_, Option<u64>, ServiceError>(|txn| {
            Box::pin(async move {
                let Some(found) = restaurant::Entity::find_by_id(id).one(txn).await.map_err(ServiceError::db)? else {
                    return Ok(None);
                };
                // explicit cascade: offerings, then the restaurant
                let children = restaurant_pizza::Entity::delete_many()
                    .filter(restaurant_pizza::Column::RestaurantId.eq(found.id))
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
            info!(restaurant_id = id, offerings, "deleted restaurant");
            Ok(true)
        }
        None => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use sea_orm::PaginatorTrait;

    #[tokio::test]
    async fn restaurant_detail_nests_pizzas() -> Result<(), anyhow::Error> {
        let t = get_db().await?;
        let db = &t.db;

        let shack = restaurant::create(db, "Karen's Pizza Shack", "address1").await?;
        let emma = pizza::create(db, "Emma", "Dough, Tomato Sauce, Cheese").await?;
        let geri = pizza::create(db, "Geri", "Dough, Tomato Sauce, Cheese, Pepperoni").await?;
        let first = restaurant_pizza::create(db, 1, emma.id, shack.id).await?;
        let second = restaurant_pizza::create(db, 4, geri.id, shack.id).await?;

        let detail = get_restaurant_detail(db, shack.id).await?.unwrap();
        assert_eq!(detail.restaurant, shack);
        assert_eq!(
            detail.offerings,
            vec![Offering { entry: first, pizza: emma.clone() }, Offering { entry: second, pizza: geri.clone() }]
        );

        let pizzas = pizzas_for_restaurant(db, shack.id).await?.unwrap();
        assert_eq!(pizzas, vec![emma, geri]);
        Ok(())
    }

    #[tokio::test]
    async fn restaurant_detail_missing() -> Result<(), anyhow::Error> {
        let t = get_db().await?;
        assert!(get_restaurant_detail(&t.db, 404).await?.is_none());
        assert!(pizzas_for_restaurant(&t.db, 404).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn list_is_flat_and_ordered() -> Result<(), anyhow::Error> {
        let t = get_db().await?;
        let a = restaurant::create(&t.db, "Karen's Pizza Shack", "address1").await?;
        let b = restaurant::create(&t.db, "Sanjay's Pizza", "address2").await?;
        assert_eq!(list_restaurants(&t.db).await?, vec![a, b]);
        Ok(())
    }

    #[tokio::test]
    async fn delete_restaurant_removes_offerings() -> Result<(), anyhow::Error> {
        let t = get_db().await?;
        let db = &t.db;

        let shack = restaurant::create(db, "Karen's Pizza Shack", "address1").await?;
        let kiki = restaurant::create(db, "Kiki's Pizza", "address3").await?;
        let emma = pizza::create(db, "Emma", "Dough, Tomato Sauce, Cheese").await?;
        restaurant_pizza::create(db, 1, emma.id, shack.id).await?;
        restaurant_pizza::create(db, 7, emma.id, shack.id).await?;
        restaurant_pizza::create(db, 3, emma.id, kiki.id).await?;

        assert!(delete_restaurant(db, shack.id).await?);

        assert!(get_restaurant(db, shack.id).await?.is_none());
        let orphans = restaurant_pizza::Entity::find()
            .filter(restaurant_pizza::Column::RestaurantId.eq(shack.id))
            .count(db)
            .await?;
        assert_eq!(orphans, 0);
        assert_eq!(restaurant_pizza::Entity::find().count(db).await?, 1);
        assert!(pizza::Entity::find_by_id(emma.id).one(db).await?.is_some());
        Ok(())
    }

    #[tokio::test]
    async fn delete_missing_restaurant_is_false() -> Result<(), anyhow::Error> {
        let t = get_db().await?;
        assert!(!delete_restaurant(&t.db, 12345).await?);
        Ok(())
    }
}
