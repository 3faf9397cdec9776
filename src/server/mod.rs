//! HTTP server setup and routing.

mod recommend;
mod routes;

use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;

use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::recommend::Recommender;
use crate::session::SessionStore;

/// Shared application state passed to all handlers.
///
/// The catalog is read-only and shared; each session owns its own cached
/// result set inside the store.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub catalog: Arc<Catalog>,
    pub recommender: Arc<Recommender>,
    pub sessions: Arc<RwLock<SessionStore>>,
}

impl AppState {
    pub fn new(config: AppConfig, catalog: Catalog) -> Self {
        let recommender = Recommender::from_config(&config.recommend);
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            recommender: Arc::new(recommender),
            sessions: Arc::new(RwLock::new(SessionStore::new())),
        }
    }
}

/// Creates the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(routes::health))
        .route("/config", get(routes::config))
        // Mood endpoints
        .route("/moods", get(recommend::list_moods))
        .route("/mood/detect", post(recommend::detect_mood))
        // Catalog endpoints
        .route("/catalog/stats", get(recommend::catalog_stats))
        // Recommendation endpoints
        .route("/recommend", post(recommend::recommend))
        .route("/sessions/:id/shuffle", post(recommend::shuffle))
        .route("/sessions/:id", delete(recommend::delete_session));

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
