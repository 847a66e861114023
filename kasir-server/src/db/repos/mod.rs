//! Repository implementations for resource storage
//!
//! Every store implements [`Repository`] for its record type:
//! - `PgProductRepo` / `PgCategoryRepo` run parameterized SQL
//! - `MemoryRepo` keeps records in a locked list for the life of the process
//!
//! Mutations check what the store actually touched: zero affected rows
//! is `DbError::NotFound`, never a silent success.

pub mod categories;
pub mod memory;
pub mod products;

use async_trait::async_trait;

use crate::models::Record;

pub use categories::PgCategoryRepo;
pub use memory::MemoryRepo;
pub use products::PgProductRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: i32 },

    #[error("no identities left for {resource}")]
    IdentityExhausted { resource: &'static str },
}

impl DbError {
    pub(crate) fn not_found<R: Record>(id: i32) -> Self {
        Self::NotFound {
            resource: R::RESOURCE,
            id,
        }
    }
}

/// CRUD access to one resource store.
#[async_trait]
pub trait Repository<R: Record>: Send + Sync {
    /// All records, ordered by identity. Fails as a whole on any bad row.
    async fn get_all(&self) -> Result<Vec<R>, DbError>;

    async fn get_by_id(&self, id: i32) -> Result<R, DbError>;

    /// Insert `record`; the store-assigned identity is written back into it.
    async fn create(&self, record: &mut R) -> Result<(), DbError>;

    /// Replace every field of the record with the same identity.
    async fn update(&self, record: &R) -> Result<(), DbError>;

    async fn delete(&self, id: i32) -> Result<(), DbError>;
}
