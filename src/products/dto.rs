use serde::{Deserialize, Serialize};

use crate::products::repo_types::Product;

/// Body for product create and update. Create persists the payload as-is;
/// update treats absent fields as "leave unchanged".
#[derive(Debug, Deserialize)]
pub struct ProductPayload {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub img: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub message: String,
    pub product: Product,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: String,
}
