use axum::Router;

pub mod health;
pub mod users;

/// Creates the API routes.
///
/// Takes a reference to AppState and initializes all services. Returns a
/// stateless Router (sub-routers have their state applied).
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().nest("/users", users::router(state))
}

/// Creates a router with the /ready endpoint that performs actual health checks.
///
/// This router has state applied and can be merged with the stateless app router
/// from `create_router`.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
