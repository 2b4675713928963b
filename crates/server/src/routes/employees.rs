use std::collections::HashMap;

use axum::{extract::{Multipart, Path, State}, http::StatusCode, Json};
use axum_extra::extract::WithRejection;
use common::types::Message;
use models::employee::{self, AttachmentField, EmployeeInput};
use service::db::employee_service::{self, Attachment};
use tracing::info;

use crate::errors::{parse_id, JsonApiError};
use crate::state::ServerState;

/// Text fields and file parts of an employee form.
struct EmployeeForm {
    fields: HashMap<String, String>,
    attachments: Vec<Attachment>,
}

/// Split a multipart body into text fields and the three attachment parts.
/// Empty file parts (a form submitted without choosing a file) are dropped.
async fn read_form(mut multipart: Multipart) -> Result<EmployeeForm, JsonApiError> {
    let mut form = EmployeeForm { fields: HashMap::new(), attachments: Vec::new() };
    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_owned) else { continue };
        match AttachmentField::from_form_name(&name) {
            Some(which) => {
                let file_name = field.file_name().map(str::to_owned);
                let bytes = field.bytes().await?;
                if !bytes.is_empty() {
                    form.attachments.push(Attachment { field: which, file_name, bytes: bytes.to_vec() });
                }
            }
            None => {
                let text = field.text().await?;
                form.fields.insert(name, text);
            }
        }
    }
    Ok(form)
}

#[utoipa::path(post, path = "/employees", tag = "employees",
    request_body(content = crate::openapi::EmployeeFormDoc, content_type = "multipart/form-data"),
    responses((status = 201, description = "Employee created"), (status = 400, description = "Missing required field")))]
pub async fn create(
    State(state): State<ServerState>,
    WithRejection(multipart, _): WithRejection<Multipart, JsonApiError>,
) -> Result<(StatusCode, Json<Message<employee::Model>>), JsonApiError> {
    let form = read_form(multipart).await?;
    let input = EmployeeInput::from_form(&form.fields).map_err(service::errors::ServiceError::from)?;
    let saved = employee_service::create_employee(&state.db, state.files.as_ref(), input, form.attachments).await?;
    Ok((StatusCode::CREATED, Json(Message::with_data("Employee created successfully", saved))))
}

#[derive(serde::Serialize)]
pub struct ImportSummary {
    pub inserted: usize,
}

#[utoipa::path(post, path = "/employees/upload", tag = "employees",
    request_body = Vec<crate::openapi::EmployeeFormDoc>,
    responses((status = 201, description = "Employees imported"), (status = 400, description = "Not an array or an element is incomplete")))]
pub async fn upload(
    State(state): State<ServerState>,
    WithRejection(Json(body), _): WithRejection<Json<serde_json::Value>, JsonApiError>,
) -> Result<(StatusCode, Json<Message<ImportSummary>>), JsonApiError> {
    if !body.is_array() {
        return Err(JsonApiError::bad_request("Invalid data format. Expected an array of employees."));
    }
    let rows: Vec<EmployeeInput> = serde_json::from_value(body)
        .map_err(|e| JsonApiError::bad_request(format!("Invalid employee data: {e}")))?;
    let inserted = employee_service::import_employees(&state.db, rows).await?;
    Ok((StatusCode::CREATED, Json(Message::with_data("Employees uploaded successfully", ImportSummary { inserted }))))
}

#[utoipa::path(get, path = "/employees", tag = "employees", responses((status = 200, description = "All employees")))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<employee::Model>>, JsonApiError> {
    let all = employee_service::list_employees(&state.db).await?;
    info!(count = all.len(), "list employees");
    Ok(Json(all))
}

#[utoipa::path(get, path = "/employees/{id}", tag = "employees",
    params(("id" = String, Path, description = "Employee id")),
    responses((status = 200, description = "Employee"), (status = 400, description = "Malformed id"), (status = 404, description = "Not found")))]
pub async fn get(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<employee::Model>, JsonApiError> {
    let id = parse_id(&id)?;
    employee_service::get_employee(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| JsonApiError::not_found("Employee not found"))
}

#[utoipa::path(put, path = "/employees/{id}", tag = "employees",
    params(("id" = String, Path, description = "Employee id")),
    request_body(content = crate::openapi::EmployeeFormDoc, content_type = "multipart/form-data"),
    responses((status = 200, description = "Updated employee"), (status = 400, description = "Malformed id"), (status = 404, description = "Not found")))]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    WithRejection(multipart, _): WithRejection<Multipart, JsonApiError>,
) -> Result<Json<employee::Model>, JsonApiError> {
    let id = parse_id(&id)?;
    let form = read_form(multipart).await?;
    let input = EmployeeInput::from_form(&form.fields).map_err(service::errors::ServiceError::from)?;
    let updated = employee_service::update_employee(&state.db, state.files.as_ref(), id, input, form.attachments).await?;
    Ok(Json(updated))
}

#[utoipa::path(delete, path = "/employees/{id}", tag = "employees",
    params(("id" = String, Path, description = "Employee id")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not found")))]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<Message<()>>, JsonApiError> {
    let id = parse_id(&id)?;
    employee_service::delete_employee(&state.db, id).await?;
    Ok(Json(Message::text("Employee deleted successfully")))
}
