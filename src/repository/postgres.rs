// src/repository/postgres.rs

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{error, info, instrument};

use crate::errors::Result;
use crate::models::Product;
use crate::repository::ProductRepository;

/// The `products` table, spelled out by hand: one column per entity field,
/// with a storage-assigned `BIGSERIAL` key. All attribute columns are nullable
/// because every entity field is optional.
const CREATE_PRODUCTS_TABLE: &str = "CREATE TABLE IF NOT EXISTS products (
    id BIGSERIAL PRIMARY KEY,
    name TEXT,
    description TEXT,
    price DOUBLE PRECISION,
    quantity INTEGER
)";

/// Postgres-backed [`ProductRepository`].
///
/// Every operation is a single runtime query against the pool; sqlx errors
/// propagate to the caller untouched. Concurrent writers to the same id are
/// serialized by Postgres row locking, not by anything in here.
#[derive(Clone)]
pub struct PgProductRepository {
  pool: PgPool,
}

impl PgProductRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  /// Applies the hand-written schema. Called once at startup, idempotent.
  #[instrument(name = "repository::ensure_schema", skip(self))]
  pub async fn ensure_schema(&self) -> Result<()> {
    sqlx::query(CREATE_PRODUCTS_TABLE).execute(&self.pool).await.map_err(|e| {
      error!("Failed to apply products schema: {}", e);
      e
    })?;
    info!("Products schema is in place.");
    Ok(())
  }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
  #[instrument(name = "repository::save", skip(self, product), fields(product_id = ?product.id))]
  async fn save(&self, product: Product) -> Result<Product> {
    let saved: Product = match product.id {
      // No id yet: let the BIGSERIAL column assign one.
      None => {
        sqlx::query_as(
          "INSERT INTO products (name, description, price, quantity) \
           VALUES ($1, $2, $3, $4) \
           RETURNING id, name, description, price, quantity",
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.quantity)
        .fetch_one(&self.pool)
        .await?
      }
      // Id already assigned: overwrite the stored record in place.
      Some(id) => {
        sqlx::query_as(
          "INSERT INTO products (id, name, description, price, quantity) \
           VALUES ($1, $2, $3, $4, $5) \
           ON CONFLICT (id) DO UPDATE \
           SET name = EXCLUDED.name, description = EXCLUDED.description, \
               price = EXCLUDED.price, quantity = EXCLUDED.quantity \
           RETURNING id, name, description, price, quantity",
        )
        .bind(id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.quantity)
        .fetch_one(&self.pool)
        .await?
      }
    };
    Ok(saved)
  }

  async fn find_by_id(&self, id: i64) -> Result<Option<Product>> {
    let product = sqlx::query_as("SELECT id, name, description, price, quantity FROM products WHERE id = $1")
      .bind(id)
      .fetch_optional(&self.pool)
      .await?;
    Ok(product)
  }

  async fn find_all(&self) -> Result<Vec<Product>> {
    let products = sqlx::query_as("SELECT id, name, description, price, quantity FROM products")
      .fetch_all(&self.pool)
      .await?;
    Ok(products)
  }

  // A null id binds as SQL NULL, which matches no row; the delete is then a
  // silent no-op, same as deleting an id that was never assigned.
  #[instrument(name = "repository::delete_by_id", skip(self))]
  async fn delete_by_id(&self, id: Option<i64>) -> Result<()> {
    sqlx::query("DELETE FROM products WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await?;
    Ok(())
  }

  async fn delete_all(&self) -> Result<()> {
    sqlx::query("DELETE FROM products").execute(&self.pool).await?;
    Ok(())
  }

  async fn count(&self) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
      .fetch_one(&self.pool)
      .await?;
    Ok(count)
  }

  async fn exists_by_id(&self, id: i64) -> Result<bool> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
      .bind(id)
      .fetch_one(&self.pool)
      .await?;
    Ok(exists)
  }
}
