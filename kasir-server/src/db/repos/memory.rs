//! In-memory repository
//!
//! Records live in a list owned by the repository for the life of the
//! process. A single lock guards both the list and the identity counter,
//! so concurrent creates never hand out the same identity.

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{DbError, Repository};
use crate::models::Record;

struct Store<R> {
    records: Vec<R>,
    /// `None` once `i32::MAX` has been handed out
    next_id: Option<i32>,
}

/// Process-local store for one resource type
pub struct MemoryRepo<R> {
    store: Mutex<Store<R>>,
}

impl<R: Record> MemoryRepo<R> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Start from existing records. Identities are kept as given and new
    /// ones continue after the highest.
    pub fn with_records(records: Vec<R>) -> Self {
        let next_id = records.iter().map(Record::id).max().unwrap_or(0).checked_add(1);
        Self {
            store: Mutex::new(Store { records, next_id }),
        }
    }
}

impl<R: Record> Default for MemoryRepo<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Record> Repository<R> for MemoryRepo<R> {
    async fn get_all(&self) -> Result<Vec<R>, DbError> {
        let store = self.store.lock().await;
        Ok(store.records.clone())
    }

    async fn get_by_id(&self, id: i32) -> Result<R, DbError> {
        let store = self.store.lock().await;
        store
            .records
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| DbError::not_found::<R>(id))
    }

    async fn create(&self, record: &mut R) -> Result<(), DbError> {
        let mut store = self.store.lock().await;
        let id = store.next_id.ok_or(DbError::IdentityExhausted {
            resource: R::RESOURCE,
        })?;
        record.set_id(id);
        store.next_id = id.checked_add(1);
        store.records.push(record.clone());
        Ok(())
    }

    async fn update(&self, record: &R) -> Result<(), DbError> {
        let mut store = self.store.lock().await;
        let slot = store
            .records
            .iter_mut()
            .find(|r| r.id() == record.id())
            .ok_or_else(|| DbError::not_found::<R>(record.id()))?;
        *slot = record.clone();
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), DbError> {
        let mut store = self.store.lock().await;
        let index = store
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| DbError::not_found::<R>(id))?;
        store.records.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::*;
    use crate::models::product::seed_products;
    use crate::models::{Category, Product};

    #[tokio::test]
    async fn create_writes_identity_back() {
        let repo = MemoryRepo::<Category>::new();
        let mut category = Category::new("Makanan", "Makanan instan");

        repo.create(&mut category).await.unwrap();

        assert_eq!(category.id, 1);
        assert_eq!(repo.get_by_id(1).await.unwrap(), category);
    }

    #[tokio::test]
    async fn identities_continue_after_seed() {
        let repo = MemoryRepo::with_records(seed_products());
        let mut product = Product::new("Aqua", 4000, 24);

        repo.create(&mut product).await.unwrap();
        assert_eq!(product.id, 4);
    }

    #[tokio::test]
    async fn identities_are_not_reused_after_delete() {
        let repo = MemoryRepo::with_records(seed_products());
        repo.delete(3).await.unwrap();

        let mut product = Product::new("Aqua", 4000, 24);
        repo.create(&mut product).await.unwrap();

        assert_eq!(product.id, 4);
        assert_eq!(repo.get_all().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn identity_space_exhaustion_is_an_error() {
        let mut last = Category::new("Terakhir", "");
        last.id = i32::MAX - 1;
        let repo = MemoryRepo::with_records(vec![last]);

        let mut category = Category::new("Minuman", "");
        repo.create(&mut category).await.unwrap();
        assert_eq!(category.id, i32::MAX);

        let mut overflow = Category::new("Makanan", "");
        assert!(matches!(
            repo.create(&mut overflow).await,
            Err(DbError::IdentityExhausted { resource: "Kategori" })
        ));
        assert_eq!(overflow.id, 0);
        assert_eq!(repo.get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn seeded_max_identity_leaves_no_room() {
        let mut top = Product::new("Puncak", 1, 1);
        top.id = i32::MAX;
        let repo = MemoryRepo::with_records(vec![top]);

        let mut product = Product::new("Aqua", 4000, 24);
        assert!(matches!(
            repo.create(&mut product).await,
            Err(DbError::IdentityExhausted { .. })
        ));
    }

    #[tokio::test]
    async fn get_all_preserves_order() {
        let repo = MemoryRepo::with_records(seed_products());
        let ids: Vec<i32> = repo.get_all().await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn update_replaces_whole_record() {
        let repo = MemoryRepo::with_records(seed_products());
        let mut product = Product::new("Indomie Rasa Baru", 4000, 90);
        product.id = 1;

        repo.update(&product).await.unwrap();
        assert_eq!(repo.get_by_id(1).await.unwrap(), product);
    }

    #[tokio::test]
    async fn missing_identity_is_not_found() {
        let repo = MemoryRepo::<Product>::new();
        let mut ghost = Product::new("Hantu", 1, 1);
        ghost.id = 999;

        assert!(matches!(
            repo.get_by_id(999).await,
            Err(DbError::NotFound { resource: "Produk", id: 999 })
        ));
        assert!(matches!(repo.update(&ghost).await, Err(DbError::NotFound { .. })));
        assert!(matches!(repo.delete(999).await, Err(DbError::NotFound { .. })));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_get_distinct_identities() {
        let repo = Arc::new(MemoryRepo::<Category>::new());

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    let mut category = Category::new(format!("kategori-{i}"), "");
                    repo.create(&mut category).await.unwrap();
                    category.id
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            ids.insert(handle.await.unwrap());
        }

        assert_eq!(ids.len(), 50);
        assert_eq!(repo.get_all().await.unwrap().len(), 50);
    }
}
