//! Create `restaurants` table.
//!
//! Parent side of the restaurant/pizza offering relationship.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Restaurants::Table)
                    .if_not_exists()
                    .col(pk_auto(Restaurants::Id))
                    .col(string(Restaurants::Name).not_null())
                    .col(string(Restaurants::Address).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Restaurants::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Restaurants { Table, Id, Name, Address }
