//! HTTP host for the `shapes` measurement core.

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use shapes::{History, SavedResults};
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;

pub mod config;
pub mod error;
pub mod routes;

pub use config::{ConfigError, ServerConfig};

#[derive(Clone)]
pub struct AppState {
    pub history: Arc<Mutex<History>>,
    pub saved: Arc<Mutex<SavedResults>>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            history: Arc::new(Mutex::new(History::with_limit(config.history_limit))),
            saved: Arc::new(Mutex::new(SavedResults::new())),
        }
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(routes::health))
        .route("/api/shapes", get(routes::list_shapes))
        .route("/api/measure", post(routes::measure))
        .route("/api/compare", post(routes::compare))
        .route("/api/history", get(routes::get_history).delete(routes::clear_history))
        .route(
            "/api/saved",
            get(routes::list_saved)
                .post(routes::save_result)
                .delete(routes::clear_saved),
        )
        .route("/api/saved/{id}", delete(routes::delete_saved))
        .route("/api/calculate", post(routes::calculate))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
