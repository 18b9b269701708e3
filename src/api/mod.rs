mod handlers;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::board::Board;

pub use handlers::ErrorResponse;

pub fn create_router(board: Board) -> Router {
    Router::new()
        // Tickets
        .route("/current-ticket", get(handlers::current_ticket))
        .route("/ticket/{id}", get(handlers::get_ticket))
        .route("/tickets", get(handlers::list_tickets))
        // Task metadata (names may contain slashes)
        .route("/task/{*name}", get(handlers::get_task))
        // Health
        .route("/health", get(handlers::health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(board)
}
