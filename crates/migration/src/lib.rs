//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_restaurants;
mod m20240101_000002_create_pizzas;
mod m20240101_000003_create_restaurant_pizzas;
mod m20240101_000004_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_restaurants::Migration),
            Box::new(m20240101_000002_create_pizzas::Migration),
            Box::new(m20240101_000003_create_restaurant_pizzas::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000004_add_indexes::Migration),
        ]
    }
}
