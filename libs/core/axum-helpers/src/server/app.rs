use super::shutdown::shutdown_signal;
use crate::errors::handlers::not_found;
use crate::http::security::security_headers;
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::io;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;

/// Assemble the service router: API routes at the root, docs UIs on the
/// side, shared middleware wrapped around everything.
///
/// Swagger UI, ReDoc, RapiDoc and Scalar are all mounted against the same
/// `/api-docs/openapi.json` document. Requests that match nothing fall
/// through to the JSON 404 handler. Tracing, security headers and
/// compression apply to every route.
///
/// CORS is opt-in through `CORS_ALLOWED_ORIGIN`, a comma-separated origin
/// list such as `http://localhost:3000,https://example.com`. Without the
/// variable no CORS layer is mounted, which suits same-origin and
/// server-to-server deployments.
///
/// Domain routers carry their own state; only cross-cutting concerns are
/// added here.
///
/// # Errors
/// Fails when `CORS_ALLOWED_ORIGIN` is set but empty or holds an origin
/// that is not a valid header value.
pub async fn create_router<T>(api: Router) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    let docs = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()));

    let mut router = docs
        .merge(api)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers));

    if let Some(cors) = cors_from_env()? {
        router = router.layer(cors);
    }

    Ok(router.layer(CompressionLayer::new()))
}

fn cors_from_env() -> io::Result<Option<CorsLayer>> {
    match std::env::var("CORS_ALLOWED_ORIGIN") {
        Ok(origins) => parse_cors_layer(&origins).map(Some),
        Err(_) => {
            tracing::debug!("CORS_ALLOWED_ORIGIN not set, skipping CORS layer");
            Ok(None)
        }
    }
}

fn parse_cors_layer(origins: &str) -> io::Result<CorsLayer> {
    use axum::http::{HeaderName, HeaderValue, Method, header};
    use tower_http::cors::AllowOrigin;

    let invalid = |message: String| io::Error::new(io::ErrorKind::InvalidInput, message);

    let parsed = origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| invalid(format!("CORS_ALLOWED_ORIGIN holds an invalid origin: {e}")))?;

    if parsed.is_empty() {
        return Err(invalid(
            "CORS_ALLOWED_ORIGIN is set but lists no origins".to_owned(),
        ));
    }

    info!(origins, "CORS enabled");

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(parsed))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
            header::COOKIE,
            HeaderName::from_static("x-csrf-token"),
        ])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600)))
}

/// Bind, serve until shutdown, then run `cleanup` with a deadline.
///
/// SIGTERM or ctrl-c stops the listener and drains in-flight requests.
/// Once serving ends the `cleanup` future gets `shutdown_timeout` to
/// close pools and flush state; overrunning the deadline is logged, not
/// fatal.
///
/// # Example
/// ```ignore
/// let close_pool = async move { db.close().await.ok(); };
/// create_production_app(router, &config, Duration::from_secs(30), close_pool).await?;
/// ```
///
/// # Errors
/// Fails when the listener cannot bind the configured address or the
/// server errors while running.
pub async fn create_production_app<F>(
    router: Router,
    config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: std::future::Future<Output = ()>,
{
    let listener = tokio::net::TcpListener::bind(config.address()).await?;
    info!(addr = %listener.local_addr()?, "server listening");

    let served = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| tracing::error!("server error: {e:?}"));

    info!(?shutdown_timeout, "running shutdown cleanup");
    if tokio::time::timeout(shutdown_timeout, cleanup)
        .await
        .is_err()
    {
        tracing::warn!(?shutdown_timeout, "cleanup overran its deadline");
    }

    served
}
