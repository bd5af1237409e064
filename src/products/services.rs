use sqlx::PgPool;
use uuid::Uuid;

use crate::error::ApiError;
use crate::products::dto::ProductPayload;
use crate::products::repo_types::Product;

// Products carry no field validation; each operation is a single store
// call, with "no such id" mapped to the not-found error.

pub async fn list(db: &PgPool) -> Result<Vec<Product>, ApiError> {
    Ok(Product::list(db).await?)
}

pub async fn create(db: &PgPool, payload: ProductPayload) -> Result<Product, ApiError> {
    Ok(Product::insert(db, &payload).await?)
}

pub async fn update(db: &PgPool, id: Uuid, payload: ProductPayload) -> Result<Product, ApiError> {
    Product::update(db, id, &payload)
        .await?
        .ok_or_else(|| ApiError::NotFound("product not found".into()))
}

pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), ApiError> {
    if !Product::delete(db, id).await? {
        return Err(ApiError::NotFound("product not found".into()));
    }
    Ok(())
}
