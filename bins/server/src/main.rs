//! reportd API Server
//!
//! Main entry point for the report backend service.

use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reportd_api::{AppState, create_router};
use reportd_core::export::{DocumentConverter, WkhtmltopdfConverter};
use reportd_core::report::ReportService;
use reportd_db::{ProcedureGateway, ReportRepository, connect};
use reportd_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reportd=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Connect to database
    let pool = connect(&config.database.url, config.database.max_connections).await?;
    info!("Connected to database");

    // Wire the report service over the store-backed repository
    let repository = ReportRepository::new(ProcedureGateway::new(pool));
    let service = ReportService::new(repository);

    // Set up the print-document converter
    let converter = WkhtmltopdfConverter::new(
        config.export.converter_path.clone(),
        Duration::from_secs(config.export.converter_timeout_secs),
    );
    if converter.available() {
        info!(binary = %converter.binary_path().display(), "Document converter found");
    } else {
        warn!(
            binary = %converter.binary_path().display(),
            "Document converter not found; PDF export will be unavailable"
        );
    }

    // Create application state
    let state = AppState {
        service: Arc::new(service),
        converter: Arc::new(converter),
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
