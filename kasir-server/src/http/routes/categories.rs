//! Category endpoints under /api/categories

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use super::{malformed_id, MessageResponse};
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ValidId};
use crate::http::server::AppState;
use crate::models::Category;

/// GET /api/categories
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Category>>, ApiError> {
    let categories = state.categories.get_all().await?;
    Ok(Json(categories))
}

/// POST /api/categories
///
/// `{}` and objects with empty strings are valid; only malformed JSON is rejected.
async fn create_category(
    State(state): State<Arc<AppState>>,
    JsonBody(mut category): JsonBody<Category>,
) -> Result<(StatusCode, Json<Category>), ApiError> {
    state.categories.create(&mut category).await?;
    tracing::debug!(id = category.id, "category created");

    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /api/categories/{id}
async fn get_category(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<Category>, ApiError> {
    let category = state.categories.get_by_id(id).await?;
    Ok(Json(category))
}

/// PUT /api/categories/{id}
async fn update_category(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    JsonBody(mut category): JsonBody<Category>,
) -> Result<Json<Category>, ApiError> {
    category.id = id;
    state.categories.update(&category).await?;
    Ok(Json(category))
}

/// DELETE /api/categories/{id}
async fn delete_category(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<MessageResponse>, ApiError> {
    state.categories.delete(id).await?;

    Ok(Json(MessageResponse {
        message: "Kategori berhasil dihapus",
    }))
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/categories", get(list_categories).post(create_category))
        .route(
            "/api/categories/{id}",
            get(get_category)
                .put(update_category)
                .delete(delete_category),
        )
        .route("/api/categories/", malformed_id())
        .route("/api/categories/{id}/{*rest}", malformed_id())
}
