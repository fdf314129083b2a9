use anyhow::Result;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, TransactionTrait};

use super::support::setup_test_db;
use crate::{pizza, restaurant, restaurant_pizza};

/// Test basic transaction commit
#[tokio::test]
async fn test_transaction_commit() -> Result<()> {
    let t = setup_test_db().await?;

    let txn = t.db.begin().await?;
    let r = restaurant::create(&txn, "Sanjay's Pizza", "address2").await?;
    let p = pizza::create(&txn, "Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard").await?;
    restaurant_pizza::create(&txn, 9, p.id, r.id).await?;
    txn.commit().await?;

    assert!(restaurant::Entity::find_by_id(r.id).one(&t.db).await?.is_some());
    assert_eq!(restaurant_pizza::Entity::find().count(&t.db).await?, 1);
    Ok(())
}

/// Test transaction rollback
#[tokio::test]
async fn test_transaction_rollback() -> Result<()> {
    let t = setup_test_db().await?;

    let txn = t.db.begin().await?;
    let r = restaurant::create(&txn, "Sanjay's Pizza", "address2").await?;
    txn.rollback().await?;

    assert!(restaurant::Entity::find_by_id(r.id).one(&t.db).await?.is_none());
    Ok(())
}

/// A rejected join row inside a transaction leaves nothing behind once dropped
#[tokio::test]
async fn test_guard_failure_rolls_back_on_drop() -> Result<()> {
    let t = setup_test_db().await?;

    {
        let txn = t.db.begin().await?;
        let r = restaurant::create(&txn, "Kiki's Pizza", "address3").await?;
        let p = pizza::create(&txn, "Geri", "Dough, Tomato Sauce, Cheese, Pepperoni").await?;
        assert!(restaurant_pizza::create(&txn, 31, p.id, r.id).await.is_err());
    }

    assert_eq!(restaurant::Entity::find().count(&t.db).await?, 0);
    assert_eq!(pizza::Entity::find().count(&t.db).await?, 0);
    Ok(())
}

/// ON DELETE CASCADE from `restaurants` to `restaurant_pizzas`
#[tokio::test]
async fn test_restaurant_delete_cascades_in_schema() -> Result<()> {
    let t = setup_test_db().await?;
    let db = &t.db;

    let shack = restaurant::create(db, "Karen's Pizza Shack", "address1").await?;
    let kiki = restaurant::create(db, "Kiki's Pizza", "address3").await?;
    let emma = pizza::create(db, "Emma", "Dough, Tomato Sauce, Cheese").await?;
    restaurant_pizza::create(db, 1, emma.id, shack.id).await?;
    restaurant_pizza::create(db, 2, emma.id, shack.id).await?;
    let kept = restaurant_pizza::create(db, 3, emma.id, kiki.id).await?;

    restaurant::Entity::delete_by_id(shack.id).exec(db).await?;

    let orphans = restaurant_pizza::Entity::find()
        .filter(restaurant_pizza::Column::RestaurantId.eq(shack.id))
        .count(db)
        .await?;
    assert_eq!(orphans, 0);
    assert_eq!(restaurant_pizza::Entity::find().all(db).await?, vec![kept]);
    assert!(pizza::Entity::find_by_id(emma.id).one(db).await?.is_some());
    Ok(())
}

/// ON DELETE CASCADE from `pizzas` to `restaurant_pizzas`
#[tokio::test]
async fn test_pizza_delete_cascades_in_schema() -> Result<()> {
    let t = setup_test_db().await?;
    let db = &t.db;

    let shack = restaurant::create(db, "Karen's Pizza Shack", "address1").await?;
    let emma = pizza::create(db, "Emma", "Dough, Tomato Sauce, Cheese").await?;
    let geri = pizza::create(db, "Geri", "Dough, Tomato Sauce, Cheese, Pepperoni").await?;
    restaurant_pizza::create(db, 1, emma.id, shack.id).await?;
    let kept = restaurant_pizza::create(db, 4, geri.id, shack.id).await?;

    pizza::Entity::delete_by_id(emma.id).exec(db).await?;

    assert_eq!(restaurant_pizza::Entity::find().all(db).await?, vec![kept]);
    assert!(restaurant::Entity::find_by_id(shack.id).one(db).await?.is_some());
    Ok(())
}
