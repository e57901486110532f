pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::planner::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Planner pages
        .route("/", get(handlers::handle_index))
        .route("/plan", get(handlers::handle_plan_page))
        // Planner API
        .route("/api/v1/plans", post(handlers::handle_create_plan))
        .with_state(state)
}
