pub mod models;
pub mod handlers;
pub mod logger;
pub mod metrics;

use std::sync::Arc;
use axum::{routing::{get, Router}};
use metrics::Metrics;

// share the request counters with all the handlers,
// behind an Arc since axum clones the state per request
#[derive(Clone)]
pub struct AppState {
    pub metrics: Arc<Metrics>
}

impl AppState {
    pub fn new() -> Self {

        AppState {
            metrics: Arc::new(Metrics::new())
        }

    }
}

// Router lives here rather than in main so the integration
// tests can spawn the same app on an ephemeral port.
pub fn app(state: AppState) -> Router {

    Router::new()
        .route("/data", get(handlers::ingest_reading))
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::counters_snapshot))
        .with_state(state) // share the app state

}
