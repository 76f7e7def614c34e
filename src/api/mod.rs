//! Trackdesk REST API
//!
//! HTTP API layer for Trackdesk, built with Axum. The external dashboard
//! widgets (form, editable grid, multiselect, charts) are the clients; each
//! user interaction maps to exactly one request here.
//!
//! # Endpoints
//!
//! ## Tickets
//! - `GET /api/v1/sessions/:session/tickets` - List the session's table
//! - `POST /api/v1/sessions/:session/tickets` - Submit a new ticket
//! - `PATCH /api/v1/sessions/:session/tickets` - Reconcile grid edits
//!
//! ## Stats
//! - `GET /api/v1/sessions/:session/stats` - Filtered aggregates for the charts
//!
//! ## Tracks
//! - `GET /api/v1/tracks` - Track catalog with display colors
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use trackdesk::api::{serve, ApiConfig, AppState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApiConfig::default();
//!     let state = AppState::new(config.clone(), 42);
//!     serve(state, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let max_body_size = state.config.max_body_size;

    let api_routes = Router::new()
        // Ticket routes
        .route(
            "/sessions/:session/tickets",
            get(routes::tickets::list_tickets),
        )
        .route(
            "/sessions/:session/tickets",
            post(routes::tickets::submit_ticket),
        )
        .route(
            "/sessions/:session/tickets",
            patch(routes::tickets::edit_tickets),
        )
        // Stats routes
        .route("/sessions/:session/stats", get(routes::stats::session_stats))
        // Track catalog
        .route("/tracks", get(routes::tracks::list_tracks))
        .layer(DefaultBodyLimit::max(max_body_size));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()) // Configure properly in production
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Trackdesk API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Trackdesk API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let state = AppState::new(ApiConfig::default(), 42);
        build_router(state)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/live")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full_reports_sessions() {
        let app = create_test_app();

        // Touch one session first
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/sessions/demo/tickets")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["sessions"], 1);
    }

    #[tokio::test]
    async fn test_list_tickets_seeds_session() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/sessions/demo/tickets")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["total"], 100);
        assert_eq!(body["tickets"][0]["id"], "INC-1100");
        assert_eq!(body["tickets"][99]["id"], "INC-1001");
    }

    #[tokio::test]
    async fn test_submit_ticket_round_trip() {
        let app = create_test_app();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/sessions/demo/tickets")
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        r#"{"issue": "X", "priority": "High", "track": "KAFKA"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);

        let body = body_json(response).await;
        assert_eq!(body["id"], "TICKET-1101");
        assert_eq!(body["status"], "Open");
        assert_eq!(body["priority"], "High");
        assert_eq!(body["track"], "KAFKA");

        // New row is the table head and the count grew by one
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/sessions/demo/tickets")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["total"], 101);
        assert_eq!(body["tickets"][0]["id"], "TICKET-1101");
    }

    #[tokio::test]
    async fn test_submit_invalid_track_rejected() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/sessions/demo/tickets")
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        r#"{"issue": "X", "priority": "High", "track": "ORACLE"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_submit_invalid_json_rejected() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/sessions/demo/tickets")
                    .header("Content-Type", "application/json")
                    .body(Body::from("not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_edit_tickets_applies_and_skips() {
        let app = create_test_app();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PATCH")
                    .uri("/api/v1/sessions/demo/tickets")
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        r#"{"edits": [
                            {"id": "INC-1100", "status": "Closed"},
                            {"id": "INC-9999", "status": "Closed"}
                        ]}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["applied"], 1);
        assert_eq!(body["skipped"], 1);
        assert_eq!(body["total"], 100);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/sessions/demo/tickets")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["tickets"][0]["id"], "INC-1100");
        assert_eq!(body["tickets"][0]["status"], "Closed");
    }

    #[tokio::test]
    async fn test_empty_edit_batch_rejected() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("PATCH")
                    .uri("/api/v1/sessions/demo/tickets")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"edits": []}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_stats_default_selection() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/sessions/demo/stats")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["filtered_total"], 100);
        assert_eq!(body["all_tracks_selected"], true);
        assert_eq!(body["first_response_hours"], 5.2);
        assert_eq!(body["tracks"].as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_stats_empty_selection_zeroes_out() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/sessions/demo/stats?tracks=")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["filtered_total"], 0);
        assert_eq!(body["open_count"], 0);
        assert_eq!(body["all_tracks_selected"], false);
    }

    #[tokio::test]
    async fn test_stats_unknown_track_rejected() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/sessions/demo/stats?tracks=ORACLE")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_sessions_do_not_share_tables() {
        let app = create_test_app();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/sessions/alice/tickets")
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        r#"{"issue": "only in alice", "priority": "Low", "track": "MQ"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/sessions/bob/tickets")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["total"], 100);
    }

    #[tokio::test]
    async fn test_track_catalog() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/tracks")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["total"], 6);
        assert_eq!(body["tracks"][0]["name"], "TIBCO");
        assert_eq!(body["tracks"][0]["color"], "#FF4136");
    }
}
