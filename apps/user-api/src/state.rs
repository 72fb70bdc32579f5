//! State shared across request handlers.

/// Everything a handler may need: configuration plus the connection pool.
///
/// Clones are handle copies, so each router layer can take its own.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub db: database::postgres::DatabaseConnection,
}
