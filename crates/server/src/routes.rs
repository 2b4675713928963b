use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;
use configs::StorageConfig;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod employees;
pub mod salaries;
pub mod ponds;
pub mod pond_entries;
pub mod products;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: farm collections, attachments and docs.
pub fn build_router(state: ServerState, cors: CorsLayer, storage: &StorageConfig) -> Router {
    let employees = Router::new()
        .route("/employees", post(employees::create).get(employees::list))
        .route("/employees/upload", post(employees::upload))
        .route(
            "/employees/:id",
            get(employees::get).put(employees::update).delete(employees::delete),
        );

    let salaries = Router::new()
        .route("/salaries", post(salaries::create).get(salaries::list))
        .route("/salaries/delete-by-date", post(salaries::delete_by_date))
        .route(
            "/salaries/:id",
            get(salaries::get).put(salaries::update).delete(salaries::delete),
        );

    let api = Router::new()
        .route("/api/ponds", post(ponds::create).get(ponds::list))
        .route("/api/ponds/:id", get(ponds::get).put(ponds::update).delete(ponds::delete))
        .route("/api/products", post(products::create).get(products::list))
        .route(
            "/api/products/:id",
            get(products::get).put(products::update).delete(products::delete),
        )
        .route("/api/pondEntries", post(pond_entries::create_batch).get(pond_entries::list))
        .route("/api/pondEntries/one", post(pond_entries::create_one))
        .route(
            "/api/pondEntries/:id",
            get(pond_entries::get).put(pond_entries::update_products),
        );

    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(employees)
        .merge(salaries)
        .merge(api)
        // uploaded attachments, readable by anyone who knows the path
        .nest_service("/uploads", ServeDir::new(&storage.upload_dir))
        .with_state(state)
        .layer(DefaultBodyLimit::max(storage.max_body_bytes))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
