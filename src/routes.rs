use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::state::AppState;
use crate::workbench;

pub fn create_routes(state: AppState) -> Router<AppState> {
    let server_config = &state.config.server;

    Router::new()
        // Workbench
        .route("/", get(workbench::show).post(workbench::submit))

        // REST API routes
        .route("/api/process-text", post(handlers::process_text))
        .route("/api/health", get(handlers::health_check))

        // Static file serving
        .nest_service("/static", ServeDir::new(&server_config.static_dir))
}

/// Router with state and the tracing and CORS layers applied.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(create_routes(state.clone()))
        .layer(
            tower::ServiceBuilder::new()
                .layer(tower_http::trace::TraceLayer::new_for_http())
                .layer(tower_http::cors::CorsLayer::permissive()),
        )
        .with_state(state)
}
