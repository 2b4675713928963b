use sea_orm_migration::prelude::*;

use crate::m20240501_000001_create_employee::Employee;
use crate::m20240501_000002_create_salary::Salary;
use crate::m20240501_000004_create_pond_entry::PondEntry;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Employee: lookup by badge number (not unique, imports may repeat it)
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_employee_employee_id")
                    .table(Employee::Table)
                    .col(Employee::EmployeeId)
                    .to_owned(),
            )
            .await?;

        // Salary: delete-by-date scans on the date prefix
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_salary_date")
                    .table(Salary::Table)
                    .col(Salary::Date)
                    .to_owned(),
            )
            .await?;

        // PondEntry: filtered read on (pond_name, date)
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_pond_entry_pond_date")
                    .table(PondEntry::Table)
                    .col(PondEntry::PondName)
                    .col(PondEntry::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_pond_entry_pond_date").table(PondEntry::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_salary_date").table(Salary::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_employee_employee_id").table(Employee::Table).to_owned())
            .await
    }
}
