// src/repository/memory.rs

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::Result;
use crate::models::Product;
use crate::repository::ProductRepository;

struct Store {
  records: HashMap<i64, Product>,
  next_id: i64,
}

/// In-memory [`ProductRepository`], used as the storage double in tests.
///
/// Ids start at 1 and only ever move forward; saving a product that carries an
/// explicit id bumps the counter past it, so an id is never handed out twice
/// within one repository's lifetime.
pub struct InMemoryProductRepository {
  store: Mutex<Store>,
}

impl InMemoryProductRepository {
  pub fn new() -> Self {
    Self {
      store: Mutex::new(Store {
        records: HashMap::new(),
        next_id: 1,
      }),
    }
  }
}

impl Default for InMemoryProductRepository {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
  async fn save(&self, mut product: Product) -> Result<Product> {
    let mut store = self.store.lock().unwrap();
    let id = match product.id {
      Some(id) => {
        store.next_id = store.next_id.max(id + 1);
        id
      }
      None => {
        let id = store.next_id;
        store.next_id += 1;
        id
      }
    };
    product.id = Some(id);
    store.records.insert(id, product.clone());
    Ok(product)
  }

  async fn find_by_id(&self, id: i64) -> Result<Option<Product>> {
    Ok(self.store.lock().unwrap().records.get(&id).cloned())
  }

  async fn find_all(&self) -> Result<Vec<Product>> {
    Ok(self.store.lock().unwrap().records.values().cloned().collect())
  }

  async fn delete_by_id(&self, id: Option<i64>) -> Result<()> {
    // A null id matches nothing; like a never-assigned id, the delete is a no-op.
    if let Some(id) = id {
      self.store.lock().unwrap().records.remove(&id);
    }
    Ok(())
  }

  async fn delete_all(&self) -> Result<()> {
    self.store.lock().unwrap().records.clear();
    Ok(())
  }

  async fn count(&self) -> Result<i64> {
    Ok(self.store.lock().unwrap().records.len() as i64)
  }

  async fn exists_by_id(&self, id: i64) -> Result<bool> {
    Ok(self.store.lock().unwrap().records.contains_key(&id))
  }
}
