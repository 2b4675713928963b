use axum::{extract::{Path, State}, http::StatusCode, Json};
use axum_extra::extract::WithRejection;
use common::types::Message;
use models::salary::{self, SalaryInput};
use serde::{Deserialize, Serialize};
use service::db::salary_service;
use utoipa::ToSchema;

use crate::errors::{parse_id, JsonApiError};
use crate::state::ServerState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct DeleteByDateRequest {
    pub date: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteByDateReply {
    pub message: String,
    pub deleted: u64,
}

#[utoipa::path(post, path = "/salaries", tag = "salaries",
    request_body = Vec<crate::openapi::SalaryDoc>,
    responses((status = 201, description = "Entries saved"), (status = 400, description = "Body is not an array")))]
pub async fn create(
    State(state): State<ServerState>,
    WithRejection(Json(body), _): WithRejection<Json<serde_json::Value>, JsonApiError>,
) -> Result<(StatusCode, Json<Message<Vec<salary::Model>>>), JsonApiError> {
    if !body.is_array() {
        return Err(JsonApiError::bad_request("Invalid data format. Expected an array of salary entries."));
    }
    let rows: Vec<SalaryInput> = serde_json::from_value(body)
        .map_err(|e| JsonApiError::bad_request(format!("Invalid salary data: {e}")))?;
    let saved = salary_service::create_salaries(&state.db, rows).await?;
    Ok((StatusCode::CREATED, Json(Message::with_data("Salary data saved successfully", saved))))
}

#[utoipa::path(get, path = "/salaries", tag = "salaries", responses((status = 200, description = "All salary entries")))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<salary::Model>>, JsonApiError> {
    Ok(Json(salary_service::list_salaries(&state.db).await?))
}

#[utoipa::path(get, path = "/salaries/{id}", tag = "salaries",
    params(("id" = String, Path, description = "Salary entry id")),
    responses((status = 200, description = "Salary entry"), (status = 404, description = "Not found")))]
pub async fn get(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<salary::Model>, JsonApiError> {
    let id = parse_id(&id)?;
    salary_service::get_salary(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| JsonApiError::not_found("Salary not found"))
}

#[utoipa::path(put, path = "/salaries/{id}", tag = "salaries",
    params(("id" = String, Path, description = "Salary entry id")),
    request_body = crate::openapi::SalaryDoc,
    responses((status = 200, description = "Replaced entry"), (status = 404, description = "Not found")))]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    WithRejection(Json(input), _): WithRejection<Json<SalaryInput>, JsonApiError>,
) -> Result<Json<salary::Model>, JsonApiError> {
    let id = parse_id(&id)?;
    Ok(Json(salary_service::replace_salary(&state.db, id, input).await?))
}

#[utoipa::path(delete, path = "/salaries/{id}", tag = "salaries",
    params(("id" = String, Path, description = "Salary entry id")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not found")))]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<Message<()>>, JsonApiError> {
    let id = parse_id(&id)?;
    salary_service::delete_salary(&state.db, id).await?;
    Ok(Json(Message::text("Salary deleted successfully")))
}

#[utoipa::path(post, path = "/salaries/delete-by-date", tag = "salaries",
    request_body = DeleteByDateRequest,
    responses((status = 200, description = "Deleted count", body = DeleteByDateReply), (status = 400, description = "Missing or unparseable date")))]
pub async fn delete_by_date(
    State(state): State<ServerState>,
    WithRejection(Json(req), _): WithRejection<Json<DeleteByDateRequest>, JsonApiError>,
) -> Result<Json<DeleteByDateReply>, JsonApiError> {
    let raw = req
        .date
        .filter(|d| !d.trim().is_empty())
        .ok_or_else(|| JsonApiError::bad_request("date is required"))?;
    let deleted = salary_service::delete_by_date(&state.db, &raw).await?;
    let message = if deleted > 0 { "Delete Successfully" } else { "No records found for the specified date" };
    Ok(Json(DeleteByDateReply { message: message.to_string(), deleted }))
}
