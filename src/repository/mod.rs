// src/repository/mod.rs

//! Persistence gateway for [`Product`] records, keyed by the storage-assigned id.
//!
//! The trait is the only thing the service layer sees; the Postgres-backed
//! implementation is what the server runs, and the in-memory one backs the
//! test suite.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::errors::Result;
use crate::models::Product;

pub use memory::InMemoryProductRepository;
pub use postgres::PgProductRepository;

/// CRUD-style access to durable product storage.
///
/// Contracts shared by all implementations:
/// - `save` assigns a fresh unique id when the incoming product has none, and
///   overwrites the stored record in place when it does; the returned product
///   always carries the stored id.
/// - lookups report absence as `Ok(None)` / `Ok(false)`, never as an error.
/// - `delete_by_id` takes the id as it arrives from the caller, including a
///   null one; deleting a missing or null id is a no-op unless the storage
///   backend itself raises, and any storage fault propagates unchanged.
#[async_trait]
pub trait ProductRepository: Send + Sync {
  async fn save(&self, product: Product) -> Result<Product>;
  async fn find_by_id(&self, id: i64) -> Result<Option<Product>>;
  async fn find_all(&self) -> Result<Vec<Product>>;
  async fn delete_by_id(&self, id: Option<i64>) -> Result<()>;
  async fn delete_all(&self) -> Result<()>;
  async fn count(&self) -> Result<i64>;
  async fn exists_by_id(&self, id: i64) -> Result<bool>;
}
