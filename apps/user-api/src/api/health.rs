//! Liveness and readiness handlers.
//!
//! `/healthcheck` answers unconditionally; `/ready` performs a real
//! database check through the shared pool.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use axum_helpers::server::{run_health_checks, HealthCheckFuture};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

/// Liveness payload
#[derive(Serialize, ToSchema)]
pub struct HealthcheckResponse {
    #[serde(rename = "Success")]
    pub success: bool,
}

/// Liveness check
///
/// GET /healthcheck
#[utoipa::path(
    get,
    path = "/healthcheck",
    tag = "service",
    responses(
        (status = 200, description = "Service is up", body = HealthcheckResponse)
    )
)]
pub async fn healthcheck() -> Json<HealthcheckResponse> {
    Json(HealthcheckResponse { success: true })
}

/// Readiness probe.
///
/// GET /ready pings PostgreSQL through the shared pool and reports each
/// dependency as connected or disconnected.
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "database",
        Box::pin(async {
            state
                .db
                .ping()
                .await
                .map_err(|e| format!("database ping failed: {e}"))
        }),
    )];

    let (status, body) = match run_health_checks(checks).await {
        Ok(report) | Err(report) => report,
    };
    (status, body).into_response()
}
