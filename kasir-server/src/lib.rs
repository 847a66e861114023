//! kasir-server: HTTP CRUD service for products and categories
//!
//! Each resource is served through three layers: a repository that owns
//! the store, a service seam for business rules, and axum handlers that
//! map results to JSON responses.

pub mod db;
pub mod http;
pub mod models;
pub mod services;

pub use db::repos::{DbError, Repository};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
pub use models::{Category, Product, Record};
