//! API Router and Application State
//!
//! Central routing configuration and shared state.

mod error;
pub mod navigation;

use axum::{extract::State, routing::get, Json, Router};
use erp_common::NavigationGroup;
use serde::Serialize;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Config;

pub use error::{ApiError, ErrorResponse};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<Config>,
    /// Navigation tree, frozen at start-up
    pub navigation: Arc<Vec<NavigationGroup>>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(config: Config, navigation: Vec<NavigationGroup>) -> Self {
        Self {
            config: Arc::new(config),
            navigation: Arc::new(navigation),
        }
    }
}

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Session-filtered navigation
        .route("/api/navigation", get(navigation::get_navigation))
        .route("/api/navigation/access", get(navigation::check_route_access))
        .route("/api/session", get(navigation::get_session))
        .route("/api/catalog", get(navigation::get_catalog))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // State
        .with_state(state)
}

/// Health check response.
#[derive(Serialize)]
struct HealthResponse {
    /// Service status
    status: &'static str,
    /// Number of groups in the served navigation tree
    groups: usize,
}

/// Health check endpoint.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        groups: state.navigation.len(),
    })
}
