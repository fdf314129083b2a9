use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // RestaurantPizzas: lookups by owning restaurant (detail view, cascade delete)
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_restaurant_pizzas_restaurant")
                    .table(RestaurantPizzas::Table)
                    .col(RestaurantPizzas::RestaurantId)
                    .to_owned(),
            )
            .await?;

        // RestaurantPizzas: lookups by pizza (pizza cascade delete, restaurants-for-pizza)
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_restaurant_pizzas_pizza")
                    .table(RestaurantPizzas::Table)
                    .col(RestaurantPizzas::PizzaId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_restaurant_pizzas_pizza").table(RestaurantPizzas::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_restaurant_pizzas_restaurant").table(RestaurantPizzas::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum RestaurantPizzas { Table, RestaurantId, PizzaId }
