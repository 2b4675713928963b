//! Create `pond_entry` table.
//!
//! `products` keeps the nested category/product list as a JSON document.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PondEntry::Table)
                    .if_not_exists()
                    .col(uuid(PondEntry::Id).primary_key())
                    .col(string(PondEntry::PondName).not_null())
                    .col(string(PondEntry::Date).not_null())
                    .col(timestamp_with_time_zone(PondEntry::EntryTime).not_null())
                    .col(json(PondEntry::Products).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(PondEntry::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum PondEntry {
    Table,
    Id,
    PondName,
    Date,
    EntryTime,
    Products,
}
