// src/services/mod.rs

pub mod product_service;

pub use product_service::ProductService;
