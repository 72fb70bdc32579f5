use axum::routing::get;
use axum::Router;

pub mod health;
pub mod users;

/// API routes handed to `create_router`.
///
/// Sub-routers take their state here, so the combined router is
/// stateless; the domains hold their own clones of the connection.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new()
        .nest("/user", users::router(state))
        .route("/healthcheck", get(health::healthcheck))
}

/// Stateful router for `/ready`.
///
/// Kept apart from [`routes`] because the readiness handler pings the
/// database through the state; `main` merges it into the final router.
pub fn ready_router(state: crate::state::AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
