use tokio::signal;
use tracing::info;

/// Completes when SIGINT (Ctrl+C) or SIGTERM is received.
///
/// Intended for `axum::serve().with_graceful_shutdown()`; in-flight
/// requests drain after this future resolves.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let sigterm = async {
        let mut term = signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler");
        term.recv().await;
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received Ctrl+C, shutting down"),
        _ = sigterm => info!("received SIGTERM, shutting down"),
    }
}
