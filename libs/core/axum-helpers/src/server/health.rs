use axum::{Json, http::StatusCode};
use futures::future::join_all;
use serde_json::{Value, json};
use std::future::Future;
use std::pin::Pin;

/// One dependency probe: resolves to `Ok(())` or a failure description
pub type HealthCheckFuture<'a> = Pin<Box<dyn Future<Output = Result<(), String>> + Send + 'a>>;

/// Run every named probe concurrently and fold them into one report.
///
/// Each check contributes a `"connected"`/`"disconnected"` entry under its
/// name; the overall `status` is `"ready"` only when every check passed.
/// Failures come back as `Err` with 503 so the result maps directly onto
/// a readiness handler's return value.
///
/// ```ignore
/// let ping_db: HealthCheckFuture =
///     Box::pin(async { db.ping().await.map_err(|e| e.to_string()) });
/// run_health_checks(vec![("database", ping_db)]).await
/// ```
pub async fn run_health_checks(
    checks: Vec<(&str, HealthCheckFuture<'_>)>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let (names, futures): (Vec<_>, Vec<_>) = checks.into_iter().unzip();
    let results = join_all(futures).await;

    let mut body = serde_json::Map::new();
    let mut ready = true;

    for (name, result) in names.into_iter().zip(results) {
        let state = match result {
            Ok(()) => "connected",
            Err(e) => {
                tracing::error!(check = name, error = %e, "readiness check failed");
                ready = false;
                "disconnected"
            }
        };
        body.insert(name.to_owned(), json!(state));
    }

    body.insert(
        "status".to_owned(),
        json!(if ready { "ready" } else { "not ready" }),
    );

    let response = (
        if ready {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        },
        Json(Value::Object(body)),
    );

    if ready { Ok(response) } else { Err(response) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_all_checks_passing() {
        let checks: Vec<(&str, HealthCheckFuture)> =
            vec![("database", Box::pin(async { Ok(()) }))];

        let (status, Json(body)) = run_health_checks(checks).await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ready");
        assert_eq!(body["database"], "connected");
    }

    #[tokio::test]
    async fn test_failing_check_reports_service_unavailable() {
        let checks: Vec<(&str, HealthCheckFuture)> = vec![
            ("database", Box::pin(async { Ok(()) })),
            (
                "queue",
                Box::pin(async { Err("connection refused".to_string()) }),
            ),
        ];

        let (status, Json(body)) = run_health_checks(checks).await.unwrap_err();
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "not ready");
        assert_eq!(body["database"], "connected");
        assert_eq!(body["queue"], "disconnected");
    }

    #[tokio::test]
    async fn test_no_checks_is_ready() {
        let checks: Vec<(&str, HealthCheckFuture)> = vec![];

        let (status, Json(body)) = run_health_checks(checks).await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ready");
    }
}
