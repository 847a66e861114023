//! Database layer - connection pool, schema and repositories
//!
//! - Connection pool capped at 5 connections, liveness checked on startup
//! - One repository per resource, behind the `Repository` trait
//! - Not-found is derived from empty result sets and zero affected rows

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options, PoolConfig};
pub use repos::*;
