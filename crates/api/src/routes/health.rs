//! Service health endpoint.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use reportd_core::export::DocumentConverter;

use crate::AppState;

/// Health payload: process liveness plus export-converter readiness.
///
/// The converter field is informational; a missing binary degrades the PDF
/// surface but does not make the service unhealthy.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Whether the print-document converter binary is present.
    pub converter: &'static str,
}

/// Health check handler.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        converter: if state.converter.available() {
            "ready"
        } else {
            "missing"
        },
    })
}

/// Creates health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::create_router;
    use crate::routes::test_state;

    #[tokio::test]
    async fn test_health_reports_converter_readiness() {
        let app = create_router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(json["converter"], "missing");
    }
}
