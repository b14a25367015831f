use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use models::product;
use service::catalog::{self, ProductInput};

use crate::errors::JsonApiError;
use crate::ServerState;

/// GET /products/ — all active products.
pub async fn list_products(
    State(state): State<ServerState>,
) -> Result<Json<Vec<product::Model>>, JsonApiError> {
    let items = catalog::list_products(&state.db).await?;
    Ok(Json(items))
}

/// POST /products/ — create a product; the target category must be active.
pub async fn create_product(
    State(state): State<ServerState>,
    Json(input): Json<ProductInput>,
) -> Result<(StatusCode, Json<product::Model>), JsonApiError> {
    let created = catalog::create_product(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /products/category/:category_id — active products of an active category.
pub async fn list_products_by_category(
    State(state): State<ServerState>,
    Path(category_id): Path<i32>,
) -> Result<Json<Vec<product::Model>>, JsonApiError> {
    let items = catalog::list_products_by_category(&state.db, category_id).await?;
    Ok(Json(items))
}

/// GET /products/:product_id — single product behind the integrity check.
pub async fn get_product(
    State(state): State<ServerState>,
    Path(product_id): Path<i32>,
) -> Result<Json<product::Model>, JsonApiError> {
    let found = catalog::get_product(&state.db, product_id).await?;
    Ok(Json(found))
}

/// PUT /products/:product_id — full-field replace.
pub async fn update_product(
    State(state): State<ServerState>,
    Path(product_id): Path<i32>,
    Json(input): Json<ProductInput>,
) -> Result<Json<product::Model>, JsonApiError> {
    let updated = catalog::update_product(&state.db, product_id, input).await?;
    Ok(Json(updated))
}

/// DELETE /products/:product_id — soft delete, acknowledged with a status body.
pub async fn delete_product(
    State(state): State<ServerState>,
    Path(product_id): Path<i32>,
) -> Result<Json<Value>, JsonApiError> {
    catalog::delete_product(&state.db, product_id).await?;
    Ok(Json(serde_json::json!({
        "status": "success",
        "message": "Product marked as inactive"
    })))
}
