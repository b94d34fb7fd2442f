use axum::Router;
use std::sync::Arc;

/// Creates the API routes.
///
/// Takes a reference to AppState; each domain router receives its own
/// cheap clones of the shared service and notifier and applies its state
/// internally, so the returned router is stateless.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().nest(
        "/users",
        domain_users::handlers::router(state.service.clone(), Arc::clone(&state.notifier)),
    )
}
