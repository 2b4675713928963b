//! Create `employee` table.
//!
//! Attachment columns hold storage paths, never the file bytes.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employee::Table)
                    .if_not_exists()
                    .col(uuid(Employee::Id).primary_key())
                    .col(string(Employee::FullName).not_null())
                    .col(date(Employee::DateOfBirth).not_null())
                    .col(string(Employee::Gender).not_null())
                    .col(string(Employee::MaritalStatus).not_null())
                    .col(string_null(Employee::Nationality))
                    .col(string(Employee::ContactNumber).not_null())
                    .col(string_null(Employee::EmailAddress))
                    .col(text(Employee::Address).not_null())
                    .col(string(Employee::EmployeeId).not_null())
                    .col(string(Employee::Department).not_null())
                    .col(string(Employee::Designation).not_null())
                    .col(string_null(Employee::PondNumber))
                    .col(date(Employee::DateOfJoining).not_null())
                    .col(string(Employee::EmploymentType).not_null())
                    .col(double(Employee::NetSalary).not_null())
                    .col(string(Employee::Status).not_null())
                    .col(string(Employee::Education).not_null())
                    .col(string_null(Employee::Photo))
                    .col(string_null(Employee::NidPhoto))
                    .col(string_null(Employee::CertificateCopy))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Employee::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Employee {
    Table,
    Id,
    FullName,
    DateOfBirth,
    Gender,
    MaritalStatus,
    Nationality,
    ContactNumber,
    EmailAddress,
    Address,
    EmployeeId,
    Department,
    Designation,
    PondNumber,
    DateOfJoining,
    EmploymentType,
    NetSalary,
    Status,
    Education,
    Photo,
    NidPhoto,
    CertificateCopy,
}
