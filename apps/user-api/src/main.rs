use axum_helpers::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Report hooks must be in place before anything can fail
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    // The database may still be starting alongside the service
    let db = database::postgres::connect_from_config_with_retry(config.database.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {e}"))?;

    let state = AppState { config, db };

    let api_routes = api::routes(&state);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;

    // Readiness stays outside create_router; its handler pings through the state
    let app = router.merge(api::ready_router(state.clone()));

    info!(
        name = state.config.app.name,
        version = state.config.app.version,
        "starting user API"
    );

    // State moves into the cleanup future; keep the listen address out of it
    let server_config = state.config.server.clone();

    create_production_app(app, &server_config, SHUTDOWN_TIMEOUT, async move {
        match state.db.close().await {
            Ok(()) => info!("database connection closed"),
            Err(e) => tracing::error!("could not close the PostgreSQL pool: {e}"),
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {e}"))?;

    info!("user API shutdown complete");
    Ok(())
}
