//! Product repository backed by the `products` table

use async_trait::async_trait;
use sqlx::PgPool;

use super::{DbError, Repository};
use crate::models::Product;

/// PostgreSQL product repository
#[derive(Clone)]
pub struct PgProductRepo {
    pool: PgPool,
}

impl PgProductRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Product> for PgProductRepo {
    async fn get_all(&self) -> Result<Vec<Product>, DbError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, price, stock FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    async fn get_by_id(&self, id: i32) -> Result<Product, DbError> {
        sqlx::query_as::<_, Product>("SELECT id, name, price, stock FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DbError::not_found::<Product>(id))
    }

    async fn create(&self, product: &mut Product) -> Result<(), DbError> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO products (name, price, stock) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&product.name)
        .bind(product.price)
        .bind(product.stock)
        .fetch_one(&self.pool)
        .await?;

        product.id = id;
        Ok(())
    }

    async fn update(&self, product: &Product) -> Result<(), DbError> {
        let result =
            sqlx::query("UPDATE products SET name = $1, price = $2, stock = $3 WHERE id = $4")
                .bind(&product.name)
                .bind(product.price)
                .bind(product.stock)
                .bind(product.id)
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found::<Product>(product.id));
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found::<Product>(id));
        }
        Ok(())
    }
}
