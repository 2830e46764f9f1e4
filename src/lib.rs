//! Pricing backend for the CCTV installation website.
//!
//! Serves the price calculator, package quotes and the WhatsApp booking
//! handoff over JSON. The catalog is loaded once and shared read-only.

pub mod booking;
pub mod catalog;
pub mod config;
pub mod currency;
pub mod error;
pub mod pricing;

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::catalog::ComponentCatalog;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ComponentCatalog>,
}

impl AppState {
    pub fn new(catalog: ComponentCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

/// Build the HTTP router
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .merge(pricing::router())
        .merge(booking::router());

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
