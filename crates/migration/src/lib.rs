//! Migrator registering one table per farm collection.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240501_000001_create_employee;
mod m20240501_000002_create_salary;
mod m20240501_000003_create_pond;
mod m20240501_000004_create_pond_entry;
mod m20240501_000005_create_product;
mod m20240501_000010_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240501_000001_create_employee::Migration),
            Box::new(m20240501_000002_create_salary::Migration),
            Box::new(m20240501_000003_create_pond::Migration),
            Box::new(m20240501_000004_create_pond_entry::Migration),
            Box::new(m20240501_000005_create_product::Migration),
            // Indexes should always be applied last
            Box::new(m20240501_000010_add_indexes::Migration),
        ]
    }
}
