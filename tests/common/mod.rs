// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use std::sync::Arc;

use async_trait::async_trait;
use tracing::Level;

use product_catalog::config::AppConfig;
use product_catalog::errors::{AppError, Result};
use product_catalog::models::Product;
use product_catalog::repository::ProductRepository;
use product_catalog::services::ProductService;
use product_catalog::state::AppState;

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Builders ---

pub fn product(name: &str, description: &str, price: f64, quantity: i32) -> Product {
  let mut p = Product::new();
  p.name = Some(name.to_string());
  p.description = Some(description.to_string());
  p.price = Some(price);
  p.quantity = Some(quantity);
  p
}

pub fn test_config() -> AppConfig {
  AppConfig {
    server_host: "127.0.0.1".to_string(),
    server_port: 0,
    database_url: "postgres://unused".to_string(),
    seed_db: false,
  }
}

pub fn app_state_with(repository: Arc<dyn ProductRepository>) -> AppState {
  AppState {
    product_service: Arc::new(ProductService::new(repository)),
    config: Arc::new(test_config()),
  }
}

// --- A repository whose backing storage is down ---
// Every operation fails with the same storage-layer error, so tests can check
// that nothing above the repository swallows or rewrites it.

pub struct FailingRepository;

fn storage_down() -> AppError {
  AppError::Sqlx(sqlx::Error::PoolClosed)
}

#[async_trait]
impl ProductRepository for FailingRepository {
  async fn save(&self, _product: Product) -> Result<Product> {
    Err(storage_down())
  }

  async fn find_by_id(&self, _id: i64) -> Result<Option<Product>> {
    Err(storage_down())
  }

  async fn find_all(&self) -> Result<Vec<Product>> {
    Err(storage_down())
  }

  async fn delete_by_id(&self, _id: Option<i64>) -> Result<()> {
    Err(storage_down())
  }

  async fn delete_all(&self) -> Result<()> {
    Err(storage_down())
  }

  async fn count(&self) -> Result<i64> {
    Err(storage_down())
  }

  async fn exists_by_id(&self, _id: i64) -> Result<bool> {
    Err(storage_down())
  }
}
