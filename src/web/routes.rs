// src/web/routes.rs

use actix_web::web;

// Liveness probe; no dependency on storage.
async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// This function is called in `main.rs` (and by the HTTP tests) to configure
// services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .route("/health", web::get().to(health_check_handler))
    .service(web::scope("/products").route(
      "",
      web::get().to(crate::web::handlers::product_handlers::list_products_handler),
    ));
}
