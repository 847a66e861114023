//! Product endpoints under /api/produk

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use super::{malformed_id, MessageResponse};
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ValidId};
use crate::http::server::AppState;
use crate::models::Product;

/// GET /api/produk - list all products
async fn list_products(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.products.get_all().await?;
    Ok(Json(products))
}

/// POST /api/produk - create a product, ignoring any id in the body
async fn create_product(
    State(state): State<Arc<AppState>>,
    JsonBody(mut product): JsonBody<Product>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    state.products.create(&mut product).await?;
    tracing::debug!(id = product.id, "product created");

    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /api/produk/{id} - get a single product
async fn get_product(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<Product>, ApiError> {
    let product = state.products.get_by_id(id).await?;
    Ok(Json(product))
}

/// PUT /api/produk/{id} - replace a product; the path id wins over the body
async fn update_product(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    JsonBody(mut product): JsonBody<Product>,
) -> Result<Json<Product>, ApiError> {
    product.id = id;
    state.products.update(&product).await?;
    Ok(Json(product))
}

/// DELETE /api/produk/{id}
async fn delete_product(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<MessageResponse>, ApiError> {
    state.products.delete(id).await?;
    tracing::debug!(id, "product deleted");

    Ok(Json(MessageResponse {
        message: "Produk berhasil dihapus",
    }))
}

/// Product routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/produk", get(list_products).post(create_product))
        .route(
            "/api/produk/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/api/produk/", malformed_id())
        .route("/api/produk/{id}/{*rest}", malformed_id())
}
