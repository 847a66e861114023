//! Route handlers organized by resource

pub mod categories;
pub mod health;
pub mod products;

use axum::routing::{get, MethodRouter};
use serde::Serialize;

use super::error::ApiError;

/// Confirmation body for successful deletes
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Identity paths that cannot hold an integer: an empty segment
/// (`/api/produk/`) or more than one (`/api/produk/1/x`).
pub(crate) fn malformed_id<S>() -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    get(reject_id).put(reject_id).delete(reject_id)
}

async fn reject_id() -> ApiError {
    ApiError::invalid_id()
}
