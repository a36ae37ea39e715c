// src/services/product_service.rs

use std::sync::Arc;

use tracing::instrument;

use crate::errors::Result;
use crate::models::Product;
use crate::repository::ProductRepository;

/// Pass-through business layer between the web handlers and the repository.
///
/// It adds no validation, transformation, or transaction handling of its own:
/// each call forwards to the repository verbatim and returns whatever the
/// repository returns, errors included.
pub struct ProductService {
  repository: Arc<dyn ProductRepository>,
}

impl ProductService {
  pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
    Self { repository }
  }

  #[instrument(name = "service::get_all_products", skip(self))]
  pub async fn get_all_products(&self) -> Result<Vec<Product>> {
    self.repository.find_all().await
  }

  /// Forwards the id as received, even when it is unset; whether a null id is
  /// an error is the storage backend's call, and its verdict passes through
  /// unchanged.
  #[instrument(name = "service::delete_product", skip(self))]
  pub async fn delete_product(&self, id: Option<i64>) -> Result<()> {
    self.repository.delete_by_id(id).await
  }
}
