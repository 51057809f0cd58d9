//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for report listing and lookup
//! - Export endpoints producing binary payloads
//! - Health check

pub mod routes;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use reportd_core::export::WkhtmltopdfConverter;
use reportd_core::report::ReportService;
use reportd_db::ReportRepository;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Report service facade over the store-backed repository.
    pub service: Arc<ReportService<ReportRepository>>,
    /// Print-document converter.
    pub converter: Arc<WkhtmltopdfConverter>,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
