//! Create `product` table. No column is mandatory.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(uuid(Product::Id).primary_key())
                    .col(string_null(Product::ProductCode))
                    .col(string_null(Product::ProductName))
                    .col(string_null(Product::Category))
                    .col(string_null(Product::UnitName))
                    .col(integer_null(Product::PcsCount))
                    .col(string_null(Product::SerialNo))
                    .col(double_null(Product::CostPrice))
                    .col(double_null(Product::SalePrice))
                    .col(double_null(Product::MinAlertQty))
                    .col(string_null(Product::Status))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Product::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Product {
    Table,
    Id,
    ProductCode,
    ProductName,
    Category,
    UnitName,
    PcsCount,
    SerialNo,
    CostPrice,
    SalePrice,
    MinAlertQty,
    Status,
}
