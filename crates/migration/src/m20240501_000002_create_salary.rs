//! Create `salary` table.
//!
//! Every pay column is nullable; `date` is a free-form string matched by prefix.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Salary::Table)
                    .if_not_exists()
                    .col(uuid(Salary::Id).primary_key())
                    .col(string_null(Salary::Date))
                    .col(string_null(Salary::EmployeeId))
                    .col(string_null(Salary::FullName))
                    .col(string_null(Salary::Department))
                    .col(double_null(Salary::NetSalary))
                    .col(double_null(Salary::PresentCount))
                    .col(double_null(Salary::Basic))
                    .col(double_null(Salary::HouseRent))
                    .col(double_null(Salary::Medical))
                    .col(double_null(Salary::Travel))
                    .col(double_null(Salary::Welfare))
                    .col(double_null(Salary::AttendanceBonus))
                    .col(double_null(Salary::ProvidentFund))
                    .col(double_null(Salary::Overtime))
                    .col(double_null(Salary::Bonus))
                    .col(double_null(Salary::AdvanceDeduction))
                    .col(double_null(Salary::AbsentCount))
                    .col(timestamp_with_time_zone(Salary::EntryDate).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Salary::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Salary {
    Table,
    Id,
    Date,
    EmployeeId,
    FullName,
    Department,
    NetSalary,
    PresentCount,
    Basic,
    HouseRent,
    Medical,
    Travel,
    Welfare,
    AttendanceBonus,
    ProvidentFund,
    Overtime,
    Bonus,
    AdvanceDeduction,
    AbsentCount,
    EntryDate,
}
