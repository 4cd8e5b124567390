use crate::handlers;
use crate::middleware;
use crate::state::AppState;
use axum::{middleware::from_fn_with_state, routing::get, Router};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/whoami", get(handlers::whoami))
        .layer(from_fn_with_state(
            state.clone(),
            middleware::resolve_client_ip,
        ))
        .with_state(state)
}
