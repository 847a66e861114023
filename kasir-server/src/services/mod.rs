//! Use-case services between HTTP handlers and repositories
//!
//! Services forward to their repository unchanged. Business rules such as
//! stock checks belong here so handlers and repositories stay untouched.

pub mod category_service;
pub mod product_service;

pub use category_service::CategoryService;
pub use product_service::ProductService;
