//! Database-backed services, one module per collection.
//!
//! Each function performs a direct operation against the pool; nothing here
//! spans more than one table.

use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Iterable, TransactionTrait};

use crate::errors::{db_err, ServiceError};

pub mod employee_service;
pub mod salary_service;
pub mod pond_service;
pub mod pond_entry_service;
pub mod product_service;

/// Bind parameters per statement; the lowest ceiling among supported
/// backends (SQLite builds before 3.32).
const BIND_BUDGET: usize = 999;

/// Insert every row in statements of at most `BIND_BUDGET` parameters, all
/// inside one transaction so the batch lands whole or not at all.
pub(crate) async fn insert_in_chunks<A>(db: &DatabaseConnection, rows: Vec<A>) -> Result<(), ServiceError>
where
    A: ActiveModelTrait + Send,
{
    if rows.is_empty() {
        return Ok(());
    }
    let per_row = <A::Entity as EntityTrait>::Column::iter().count().max(1);
    let chunk = (BIND_BUDGET / per_row).max(1);

    let txn = db.begin().await.map_err(db_err)?;
    let mut rows = rows.into_iter().peekable();
    while rows.peek().is_some() {
        let batch: Vec<A> = rows.by_ref().take(chunk).collect();
        <A::Entity as EntityTrait>::insert_many(batch)
            .exec(&txn)
            .await
            .map_err(db_err)?;
    }
    txn.commit().await.map_err(db_err)
}
