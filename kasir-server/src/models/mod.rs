//! Domain records exposed by the API
//!
//! Each record carries a store-assigned integer identity. Request bodies
//! decode leniently: missing fields fall back to zero values, so only
//! malformed JSON is rejected.

pub mod category;
pub mod product;

pub use category::Category;
pub use product::Product;

/// A record owned by a resource store.
///
/// Identity is assigned by the store on creation and never changes after.
pub trait Record: Clone + Send + Sync + 'static {
    /// Human-facing resource name used in not-found messages.
    const RESOURCE: &'static str;

    fn id(&self) -> i32;

    fn set_id(&mut self, id: i32);
}
