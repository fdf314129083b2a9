//! Demo data for local runs.
//!
//! Restaurants and pizzas have no HTTP create endpoints, so this is how a
//! fresh database gets rows to browse.

use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, TransactionTrait};
use tracing::{info, instrument};

use models::{pizza, restaurant, restaurant_pizza};
use crate::errors::ServiceError;

const RESTAURANTS: [(&str, &str); 3] = [
    ("Karen's Pizza Shack", "address1"),
    ("Sanjay's Pizza", "address2"),
    ("Kiki's Pizza", "address3"),
];

const PIZZAS: [(&str, &str); 3] = [
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

/// (restaurant index, pizza index, price)
const OFFERINGS: [(usize, usize, i64); 3] = [(0, 0, 1), (1, 1, 4), (2, 2, 5)];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub restaurants: usize,
    pub pizzas: usize,
    pub offerings: usize,
    pub skipped: bool,
}

/// Insert the demo rows in one transaction.
///
/// Leaves a non-empty database alone unless `force` is set, in which case
/// every existing row is cleared first.
#[instrument(skip(db))]
pub async fn seed_demo_data(db: &DatabaseConnection, force: bool) -> Result<SeedReport, ServiceError> {
    let report = db
        .transaction::<_, SeedReport, ServiceError>(|txn| {
            Box::pin(async move {
                let existing = restaurant::Entity::find().count(txn).await.map_err(ServiceError::db)?;
                if existing > 0 && !force {
                    return Ok(SeedReport { skipped: true, ..SeedReport::default() });
                }
                if force {
                    restaurant_pizza::Entity::delete_many().exec(txn).await.map_err(ServiceError::db)?;
                    pizza::Entity::delete_many().exec(txn).await.map_err(ServiceError::db)?;
                    restaurant::Entity::delete_many().exec(txn).await.map_err(ServiceError::db)?;
                }

                let mut restaurants = Vec::with_capacity(RESTAURANTS.len());
                for (name, address) in RESTAURANTS {
                    restaurants.push(restaurant::create(txn, name, address).await?);
                }
                let mut pizzas = Vec::with_capacity(PIZZAS.len());
                for (name, ingredients) in PIZZAS {
                    pizzas.push(pizza::create(txn, name, ingredients).await?);
                }
                for (r, p, price) in OFFERINGS {
                    restaurant_pizza::create(txn, price, pizzas[p].id, restaurants[r].id).await?;
                }

                Ok(SeedReport {
                    restaurants: restaurants.len(),
                    pizzas: pizzas.len(),
                    offerings: OFFERINGS.len(),
                    skipped: false,
                })
            })
        })
        .await?;

    info!(?report, "seed finished");
    Ok(report)
}
