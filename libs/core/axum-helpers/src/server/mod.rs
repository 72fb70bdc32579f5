//! Server assembly: router construction, readiness checks and serving
//! with graceful shutdown.
//!
//! ```ignore
//! let router = create_router::<ApiDoc>(api).await?;
//! let close_pool = async move { db.close().await.ok(); };
//! create_production_app(router, &server_config, Duration::from_secs(30), close_pool).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_production_app, create_router};
pub use health::{HealthCheckFuture, run_health_checks};
pub use shutdown::shutdown_signal;
