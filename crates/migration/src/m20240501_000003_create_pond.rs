//! Create `pond` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pond::Table)
                    .if_not_exists()
                    .col(uuid(Pond::Id).primary_key())
                    .col(string(Pond::Name).not_null())
                    .col(double(Pond::Area).not_null())
                    .col(integer(Pond::BoxQuantity).not_null())
                    .col(string(Pond::AssignedEmployee).not_null())
                    .col(string_len(Pond::Status, 16).not_null().default("Active"))
                    .col(date(Pond::PondStart).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Pond::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Pond {
    Table,
    Id,
    Name,
    Area,
    BoxQuantity,
    AssignedEmployee,
    Status,
    PondStart,
}
