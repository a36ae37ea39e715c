// src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::models::Product;
use crate::state::AppState;

/// GET on the products collection: the service's answer, serialized as a bare
/// JSON array. An empty catalog is a 200 with `[]`, never null and never an
/// error; a storage fault surfaces through `AppError`'s `ResponseError` impl.
#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let products: Vec<Product> = app_state.product_service.get_all_products().await?;

  info!("Successfully fetched {} products.", products.len());

  Ok(HttpResponse::Ok().json(products))
}
