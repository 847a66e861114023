//! Product use-case service

use std::sync::Arc;

use crate::db::repos::{DbError, Repository};
use crate::models::Product;

/// Entry points for product CRUD.
#[derive(Clone)]
pub struct ProductService {
    repo: Arc<dyn Repository<Product>>,
}

impl ProductService {
    pub fn new(repo: Arc<dyn Repository<Product>>) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self) -> Result<Vec<Product>, DbError> {
        self.repo.get_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Product, DbError> {
        self.repo.get_by_id(id).await
    }

    /// Create a product; on success `product.id` holds the assigned identity.
    pub async fn create(&self, product: &mut Product) -> Result<(), DbError> {
        self.repo.create(product).await
    }

    pub async fn update(&self, product: &Product) -> Result<(), DbError> {
        self.repo.update(product).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        self.repo.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::MemoryRepo;
    use crate::models::product::seed_products;

    #[tokio::test]
    async fn forwards_to_repository() {
        let service = ProductService::new(Arc::new(MemoryRepo::with_records(seed_products())));

        let mut product = Product::new("Aqua", 4000, 24);
        service.create(&mut product).await.unwrap();
        assert_eq!(service.get_by_id(product.id).await.unwrap(), product);

        service.delete(product.id).await.unwrap();
        assert!(matches!(
            service.get_by_id(product.id).await,
            Err(DbError::NotFound { .. })
        ));
    }
}
