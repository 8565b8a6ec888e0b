use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{api, state::AppState};

/// Build the full application router. Split out of `main` so integration
/// tests can drive it without binding a socket.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Dashboard page and health check
        .route("/", get(api::dashboard::index))
        .route("/health", get(health_check))
        // Read-only data endpoints
        .route("/api/stats", get(api::stats::get_stats))
        .route("/api/analytics", get(api::analytics::get_analytics))
        .route("/api/posts", get(api::posts::get_recent_posts))
        // Actions
        .route("/api/refresh", post(api::actions::refresh_data))
        .route("/api/export", post(api::actions::export_report))
        .route("/api/schedule", post(api::actions::schedule_post))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn health_check() -> &'static str {
    "OK"
}
