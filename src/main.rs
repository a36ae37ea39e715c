// src/main.rs

use std::sync::Arc;

use actix_web::{web as actix_data, App, HttpServer};
use sqlx::PgPool;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

use product_catalog::config::AppConfig;
use product_catalog::errors::Result as AppResult;
use product_catalog::models::Product;
use product_catalog::repository::{PgProductRepository, ProductRepository};
use product_catalog::services::ProductService;
use product_catalog::state::AppState;
use product_catalog::web::configure_app_routes;

/// Inserts a couple of demo products so a fresh instance has something to list.
async fn seed_db(repository: &PgProductRepository) -> AppResult<()> {
  if repository.count().await? > 0 {
    tracing::info!("Catalog already has products, skipping seed.");
    return Ok(());
  }
  let samples = [
    ("Laptop", "15-inch, 16 GB RAM", 1299.99, 10),
    ("Mouse", "Wireless, two buttons", 24.50, 120),
  ];
  for (name, description, price, quantity) in samples {
    let mut product = Product::new();
    product.name = Some(name.to_string());
    product.description = Some(description.to_string());
    product.price = Some(price);
    product.quantity = Some(quantity);
    repository.save(product).await?;
  }
  tracing::info!("Seeded demo products.");
  Ok(())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting product catalog server...");

  // Load application configuration
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg),
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      panic!("Configuration error: {}", e);
    }
  };

  // Initialize Database Pool
  let db_pool = match PgPool::connect(&app_config.database_url).await {
    Ok(pool) => {
      tracing::info!("Successfully connected to the database.");
      pool
    }
    Err(e) => {
      tracing::error!(error = %e, "Failed to connect to the database.");
      panic!("Database connection error: {}", e);
    }
  };

  // Explicit wiring: pool -> repository -> service -> handlers.
  let repository = PgProductRepository::new(db_pool);
  if let Err(e) = repository.ensure_schema().await {
    tracing::error!(error = %e, "Failed to apply database schema.");
    panic!("Schema error: {}", e);
  }

  if app_config.seed_db {
    if let Err(e) = seed_db(&repository).await {
      tracing::error!(error = %e, "Failed to seed database.");
    }
  }

  let product_service = Arc::new(ProductService::new(Arc::new(repository)));

  let app_state = AppState {
    product_service,
    config: app_config.clone(),
  };

  // Configure and Start Actix Web Server
  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
