use axum::{extract::{Path, State}, http::StatusCode, Json};
use axum_extra::extract::WithRejection;
use common::types::Message;
use models::product::{self, ProductInput};
use service::db::product_service;

use crate::errors::{parse_id, JsonApiError};
use crate::state::ServerState;

#[utoipa::path(post, path = "/api/products", tag = "products",
    request_body = crate::openapi::ProductDoc,
    responses((status = 201, description = "Product created"), (status = 400, description = "Wrong field type")))]
pub async fn create(
    State(state): State<ServerState>,
    WithRejection(Json(input), _): WithRejection<Json<ProductInput>, JsonApiError>,
) -> Result<(StatusCode, Json<Message<product::Model>>), JsonApiError> {
    let saved = product_service::create_product(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(Message::with_data("Product created successfully", saved))))
}

#[utoipa::path(get, path = "/api/products", tag = "products", responses((status = 200, description = "All products")))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<product::Model>>, JsonApiError> {
    Ok(Json(product_service::list_products(&state.db).await?))
}

#[utoipa::path(get, path = "/api/products/{id}", tag = "products",
    params(("id" = String, Path, description = "Product id")),
    responses((status = 200, description = "Product"), (status = 404, description = "Not found")))]
pub async fn get(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<product::Model>, JsonApiError> {
    let id = parse_id(&id)?;
    product_service::get_product(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| JsonApiError::not_found("Product not found"))
}

#[utoipa::path(put, path = "/api/products/{id}", tag = "products",
    params(("id" = String, Path, description = "Product id")),
    request_body = crate::openapi::ProductDoc,
    responses((status = 200, description = "Updated product"), (status = 400, description = "Invalid payload"), (status = 404, description = "Not found")))]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    WithRejection(Json(input), _): WithRejection<Json<ProductInput>, JsonApiError>,
) -> Result<Json<product::Model>, JsonApiError> {
    let id = parse_id(&id)?;
    Ok(Json(product_service::update_product(&state.db, id, input).await?))
}

#[utoipa::path(delete, path = "/api/products/{id}", tag = "products",
    params(("id" = String, Path, description = "Product id")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not found")))]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<Message<()>>, JsonApiError> {
    let id = parse_id(&id)?;
    product_service::delete_product(&state.db, id).await?;
    Ok(Json(Message::text("Product deleted successfully")))
}
