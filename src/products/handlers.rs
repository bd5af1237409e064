use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::products::dto::{DeletedResponse, ProductPayload, ProductResponse};
use crate::products::repo_types::Product;
use crate::products::services;
use crate::state::AppState;

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/products", get(list_products))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/products", post(create_product))
        .route("/products/:id", put(update_product).delete(delete_product))
}

#[instrument(skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = services::list(&state.db).await?;
    Ok(Json(products))
}

#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> Result<(StatusCode, Json<ProductResponse>), ApiError> {
    let product = services::create(&state.db, payload).await?;
    info!(product_id = %product.id, "product created");
    Ok((
        StatusCode::CREATED,
        Json(ProductResponse {
            message: "product created".into(),
            product,
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<ProductResponse>, ApiError> {
    let product = services::update(&state.db, id, payload).await?;
    info!(product_id = %id, "product updated");
    Ok(Json(ProductResponse {
        message: "product updated".into(),
        product,
    }))
}

#[instrument(skip(state))]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeletedResponse>, ApiError> {
    services::delete(&state.db, id).await?;
    info!(product_id = %id, "product deleted");
    Ok(Json(DeletedResponse {
        message: "product deleted".into(),
    }))
}
