use axum::Router;
use domain_users::{handlers, UserService};

/// User endpoints backed by the shared PostgreSQL pool.
pub fn router(state: &crate::state::AppState) -> Router {
    let service = UserService::new(state.db.clone());
    handlers::router(service)
}
