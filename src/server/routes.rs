//! HTTP route handlers.

use axum::{extract::State, Json};

use crate::types::{
    CatalogInfo, ConfigResponse, HealthResponse, HealthStatus, RecommendInfo, ServerInfo,
};

use super::AppState;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Health check endpoint
///
/// GET /api/v1/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let catalog_items = state.catalog.total_items();

    // Degraded when every catalog source loaded empty
    let status = if catalog_items > 0 {
        HealthStatus::Healthy
    } else {
        HealthStatus::Degraded
    };

    Json(HealthResponse {
        status,
        version: VERSION.to_string(),
        catalog_items,
    })
}

/// Configuration endpoint
///
/// GET /api/v1/config
pub async fn config(State(state): State<AppState>) -> Json<ConfigResponse> {
    let config = &state.config;

    Json(ConfigResponse {
        catalog: CatalogInfo {
            dir: config.catalog.dir.display().to_string(),
            total_items: state.catalog.total_items(),
        },
        recommend: RecommendInfo {
            default_top_n: config.recommend.default_top_n,
            display_floor: config.recommend.display_floor,
            display_ceiling: config.recommend.display_ceiling,
        },
        server: ServerInfo {
            host: config.server.host.clone(),
            port: config.server.port,
        },
    })
}
