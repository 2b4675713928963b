use axum::{extract::{Path, Query, State}, http::StatusCode, Json};
use axum_extra::extract::WithRejection;
use common::types::Message;
use models::pond_entry::{self, PondEntryInput, ProductsUpdate};
use serde::Deserialize;
use service::db::pond_entry_service;
use tracing::info;
use utoipa::IntoParams;

use crate::errors::{parse_id, JsonApiError};
use crate::state::ServerState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct EntryFilter {
    /// Exact pond name.
    pub pond_name: Option<String>,
    /// Any accepted date form; compared as `yyyy-mm-dd`.
    pub date: Option<String>,
}

#[utoipa::path(post, path = "/api/pondEntries", tag = "pond-entries",
    request_body = Vec<crate::openapi::PondEntryDoc>,
    responses((status = 201, description = "Entries saved"), (status = 400, description = "Not an array or an entry is incomplete")))]
pub async fn create_batch(
    State(state): State<ServerState>,
    WithRejection(Json(rows), _): WithRejection<Json<Vec<PondEntryInput>>, JsonApiError>,
) -> Result<(StatusCode, Json<Message<Vec<pond_entry::Model>>>), JsonApiError> {
    let saved = pond_entry_service::create_entries(&state.db, rows).await?;
    Ok((StatusCode::CREATED, Json(Message::with_data("Pond entries saved successfully", saved))))
}

#[utoipa::path(post, path = "/api/pondEntries/one", tag = "pond-entries",
    request_body = crate::openapi::PondEntryDoc,
    responses((status = 201, description = "Entry saved"), (status = 400, description = "Entry is incomplete")))]
pub async fn create_one(
    State(state): State<ServerState>,
    WithRejection(Json(input), _): WithRejection<Json<PondEntryInput>, JsonApiError>,
) -> Result<(StatusCode, Json<Message<pond_entry::Model>>), JsonApiError> {
    let saved = pond_entry_service::create_entry(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(Message::with_data("Pond entry saved successfully", saved))))
}

/// All entries, or those of one pond on one calendar day when both filters are given.
#[utoipa::path(get, path = "/api/pondEntries", tag = "pond-entries",
    params(EntryFilter),
    responses((status = 200, description = "Matching entries, possibly empty"), (status = 400, description = "Only one filter given")))]
pub async fn list(
    State(state): State<ServerState>,
    WithRejection(Query(filter), _): WithRejection<Query<EntryFilter>, JsonApiError>,
) -> Result<Json<Vec<pond_entry::Model>>, JsonApiError> {
    let entries = match (filter.pond_name, filter.date) {
        (None, None) => pond_entry_service::list_entries(&state.db).await?,
        (Some(pond), Some(date)) => pond_entry_service::find_by_pond_and_day(&state.db, &pond, &date).await?,
        _ => return Err(JsonApiError::bad_request("pondName and date must be given together")),
    };
    info!(count = entries.len(), "list pond entries");
    Ok(Json(entries))
}

#[utoipa::path(get, path = "/api/pondEntries/{id}", tag = "pond-entries",
    params(("id" = String, Path, description = "Pond entry id")),
    responses((status = 200, description = "Pond entry"), (status = 404, description = "Not found")))]
pub async fn get(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<pond_entry::Model>, JsonApiError> {
    let id = parse_id(&id)?;
    pond_entry_service::get_entry(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| JsonApiError::not_found("Pond entry not found"))
}

#[utoipa::path(put, path = "/api/pondEntries/{id}", tag = "pond-entries",
    params(("id" = String, Path, description = "Pond entry id")),
    request_body = crate::openapi::ProductsUpdateDoc,
    responses((status = 200, description = "Products replaced"), (status = 400, description = "Missing products"), (status = 404, description = "Not found")))]
pub async fn update_products(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    WithRejection(Json(body), _): WithRejection<Json<ProductsUpdate>, JsonApiError>,
) -> Result<Json<Message<pond_entry::Model>>, JsonApiError> {
    let id = parse_id(&id)?;
    let groups = body.products.ok_or_else(|| JsonApiError::bad_request("products is required"))?;
    let saved = pond_entry_service::update_products(&state.db, id, groups).await?;
    Ok(Json(Message::with_data("Pond entry updated successfully", saved)))
}
