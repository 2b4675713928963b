use axum::{extract::{Path, State}, http::StatusCode, Json};
use axum_extra::extract::WithRejection;
use common::types::Message;
use models::pond::{self, PondInput};
use service::db::pond_service;

use crate::errors::{parse_id, JsonApiError};
use crate::state::ServerState;

#[utoipa::path(post, path = "/api/ponds", tag = "ponds",
    request_body = crate::openapi::PondDoc,
    responses((status = 201, description = "Pond created"), (status = 400, description = "Missing field or unknown status")))]
pub async fn create(
    State(state): State<ServerState>,
    WithRejection(Json(input), _): WithRejection<Json<PondInput>, JsonApiError>,
) -> Result<(StatusCode, Json<Message<pond::Model>>), JsonApiError> {
    let saved = pond_service::create_pond(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(Message::with_data("Pond created successfully", saved))))
}

#[utoipa::path(get, path = "/api/ponds", tag = "ponds", responses((status = 200, description = "All ponds")))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<pond::Model>>, JsonApiError> {
    Ok(Json(pond_service::list_ponds(&state.db).await?))
}

#[utoipa::path(get, path = "/api/ponds/{id}", tag = "ponds",
    params(("id" = String, Path, description = "Pond id")),
    responses((status = 200, description = "Pond"), (status = 404, description = "Not found")))]
pub async fn get(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<pond::Model>, JsonApiError> {
    let id = parse_id(&id)?;
    pond_service::get_pond(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| JsonApiError::not_found("Pond not found"))
}

#[utoipa::path(put, path = "/api/ponds/{id}", tag = "ponds",
    params(("id" = String, Path, description = "Pond id")),
    request_body = crate::openapi::PondDoc,
    responses((status = 200, description = "Updated pond"), (status = 400, description = "Invalid payload"), (status = 404, description = "Not found")))]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    WithRejection(Json(input), _): WithRejection<Json<PondInput>, JsonApiError>,
) -> Result<Json<pond::Model>, JsonApiError> {
    let id = parse_id(&id)?;
    Ok(Json(pond_service::update_pond(&state.db, id, input).await?))
}

#[utoipa::path(delete, path = "/api/ponds/{id}", tag = "ponds",
    params(("id" = String, Path, description = "Pond id")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not found")))]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<Message<()>>, JsonApiError> {
    let id = parse_id(&id)?;
    pond_service::delete_pond(&state.db, id).await?;
    Ok(Json(Message::text("Pond deleted successfully")))
}
