// src/state.rs

use crate::config::AppConfig;
use crate::services::ProductService;
use std::sync::Arc;

/// Shared application state handed to every handler. Wiring is explicit:
/// the repository is passed to the service and the service to the handlers
/// at startup, with no container in between.
#[derive(Clone)]
pub struct AppState {
  pub product_service: Arc<ProductService>,
  pub config: Arc<AppConfig>,
}
