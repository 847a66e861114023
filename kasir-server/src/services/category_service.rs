//! Category use-case service

use std::sync::Arc;

use crate::db::repos::{DbError, Repository};
use crate::models::Category;

/// Entry points for category CRUD. No rules of its own yet.
#[derive(Clone)]
pub struct CategoryService {
    repo: Arc<dyn Repository<Category>>,
}

impl CategoryService {
    pub fn new(repo: Arc<dyn Repository<Category>>) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self) -> Result<Vec<Category>, DbError> {
        self.repo.get_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Category, DbError> {
        self.repo.get_by_id(id).await
    }

    /// Create a category; on success `category.id` holds the assigned identity.
    pub async fn create(&self, category: &mut Category) -> Result<(), DbError> {
        self.repo.create(category).await
    }

    pub async fn update(&self, category: &Category) -> Result<(), DbError> {
        self.repo.update(category).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        self.repo.delete(id).await
    }
}
