// src/lib.rs

//! A minimal product-catalog service: one entity, a repository over Postgres,
//! a pass-through service layer, and a single HTTP read endpoint.

pub mod config;
pub mod errors;
pub mod models;
pub mod repository;
pub mod services;
pub mod state;
pub mod web;
