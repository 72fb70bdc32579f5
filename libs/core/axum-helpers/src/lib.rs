//! Shared plumbing for the workspace's Axum services.
//!
//! - **[`server`]**: router assembly with OpenAPI docs, readiness
//!   aggregation, serving with graceful shutdown
//! - **[`http`]**: security headers middleware
//! - **[`errors`]**: the shared error response envelope and fallback handler
//!
//! ## Quick Start
//!
//! ```ignore
//! let router = create_router::<ApiDoc>(api).await?;
//! create_production_app(router, &config, Duration::from_secs(30), async {}).await?;
//! ```

pub mod errors;
pub mod http;
pub mod server;

pub use errors::ErrorResponse;
pub use http::security_headers;
pub use server::{
    HealthCheckFuture, create_production_app, create_router, run_health_checks, shutdown_signal,
};
