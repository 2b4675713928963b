use uuid::Uuid;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel};
use tracing::{info, instrument};

use models::employee::{self, AttachmentField, EmployeeInput};
use crate::errors::{db_err, ServiceError};
use crate::storage::FileStore;

/// One uploaded file destined for an employee attachment column.
#[derive(Clone, Debug)]
pub struct Attachment {
    pub field: AttachmentField,
    pub file_name: Option<String>,
    pub bytes: Vec<u8>,
}

async fn store_attachments(
    files: &dyn FileStore,
    attachments: Vec<Attachment>,
) -> Result<Vec<(AttachmentField, String)>, ServiceError> {
    let mut stored = Vec::with_capacity(attachments.len());
    for a in attachments {
        let path = files.save(a.field.form_name(), a.file_name.as_deref(), &a.bytes).await?;
        stored.push((a.field, path));
    }
    Ok(stored)
}

/// Create one employee. Required fields are checked before any file is written.
#[instrument(skip_all)]
pub async fn create_employee(
    db: &DatabaseConnection,
    files: &dyn FileStore,
    input: EmployeeInput,
    attachments: Vec<Attachment>,
) -> Result<employee::Model, ServiceError> {
    let mut model = input.into_model()?;
    for (field, path) in store_attachments(files, attachments).await? {
        model.set_attachment(field, path);
    }
    let saved = model
        .into_active_model()
        .reset_all()
        .insert(db)
        .await
        .map_err(db_err)?;
    info!(event = "employee_created", id = %saved.id, employee_id = %saved.employee_id, "employee saved");
    Ok(saved)
}

/// Validate every row, then insert all of them in one statement.
/// A single bad row rejects the whole batch before anything is written.
pub async fn import_employees(db: &DatabaseConnection, rows: Vec<EmployeeInput>) -> Result<usize, ServiceError> {
    if rows.is_empty() {
        return Err(ServiceError::Validation("Invalid data format. Expected an array of employees.".into()));
    }
    if rows.iter().any(|r| !r.has_import_essentials()) {
        return Err(ServiceError::Validation("Missing required fields in employee data.".into()));
    }
    let mut models = Vec::with_capacity(rows.len());
    for (i, row) in rows.into_iter().enumerate() {
        let m = row
            .into_model()
            .map_err(|e| ServiceError::Validation(format!("employee[{i}]: {e}")))?;
        models.push(m.into_active_model().reset_all());
    }
    let count = models.len();
    super::insert_in_chunks(db, models).await?;
    info!(event = "employees_imported", count, "bulk employee import");
    Ok(count)
}

pub async fn list_employees(db: &DatabaseConnection) -> Result<Vec<employee::Model>, ServiceError> {
    employee::Entity::find().all(db).await.map_err(db_err)
}

pub async fn get_employee(db: &DatabaseConnection, id: Uuid) -> Result<Option<employee::Model>, ServiceError> {
    employee::Entity::find_by_id(id).one(db).await.map_err(db_err)
}

/// Partial update. New attachments overwrite their path columns; the old
/// files stay on disk.
#[instrument(skip_all, fields(%id))]
pub async fn update_employee(
    db: &DatabaseConnection,
    files: &dyn FileStore,
    id: Uuid,
    mut input: EmployeeInput,
    attachments: Vec<Attachment>,
) -> Result<employee::Model, ServiceError> {
    let mut am: employee::ActiveModel = employee::Entity::find_by_id(id)
        .one(db).await.map_err(db_err)?
        .ok_or_else(|| ServiceError::not_found("Employee"))?
        .into();
    for (field, path) in store_attachments(files, attachments).await? {
        input.set_attachment(field, path);
    }
    input.merge_into(&mut am)?;
    let updated = am.update(db).await.map_err(db_err)?;
    info!(event = "employee_updated", "employee updated");
    Ok(updated)
}

pub async fn delete_employee(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    let res = employee::Entity::delete_by_id(id).exec(db).await.map_err(db_err)?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("Employee"));
    }
    info!(event = "employee_deleted", %id, "employee deleted");
    Ok(())
}
