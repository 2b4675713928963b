use uuid::Uuid;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter};
use tracing::info;

use models::dates::day_prefix;
use models::salary::{self, SalaryInput};
use crate::errors::{db_err, ServiceError};

/// Insert every entry in one statement, each stamped with the current time.
pub async fn create_salaries(db: &DatabaseConnection, rows: Vec<SalaryInput>) -> Result<Vec<salary::Model>, ServiceError> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }
    let models: Vec<salary::Model> = rows.into_iter().map(SalaryInput::into_model).collect();
    let rows = models.iter().cloned().map(|m| m.into_active_model().reset_all()).collect();
    super::insert_in_chunks(db, rows).await?;
    info!(event = "salaries_created", count = models.len(), "salary batch saved");
    Ok(models)
}

pub async fn list_salaries(db: &DatabaseConnection) -> Result<Vec<salary::Model>, ServiceError> {
    salary::Entity::find().all(db).await.map_err(db_err)
}

pub async fn get_salary(db: &DatabaseConnection, id: Uuid) -> Result<Option<salary::Model>, ServiceError> {
    salary::Entity::find_by_id(id).one(db).await.map_err(db_err)
}

/// Full replace of the payload fields; `id` and `entryDate` survive.
pub async fn replace_salary(db: &DatabaseConnection, id: Uuid, input: SalaryInput) -> Result<salary::Model, ServiceError> {
    let mut am: salary::ActiveModel = get_salary(db, id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Salary"))?
        .into();
    input.replace_into(&mut am);
    am.update(db).await.map_err(db_err)
}

pub async fn delete_salary(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    let res = salary::Entity::delete_by_id(id).exec(db).await.map_err(db_err)?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("Salary"));
    }
    Ok(())
}

/// Remove every entry whose stored date string starts with the calendar day
/// of `raw`. Entries stored in another format never match.
pub async fn delete_by_date(db: &DatabaseConnection, raw: &str) -> Result<u64, ServiceError> {
    let prefix = day_prefix(raw)?;
    let res = salary::Entity::delete_many()
        .filter(salary::Column::Date.starts_with(&prefix))
        .exec(db)
        .await
        .map_err(db_err)?;
    info!(event = "salaries_deleted_by_date", day = %prefix, deleted = res.rows_affected, "delete by date");
    Ok(res.rows_affected)
}
