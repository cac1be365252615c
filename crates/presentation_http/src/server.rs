//! Listener setup and graceful shutdown shared by both binaries

use std::{future::IntoFuture, sync::Arc, time::Duration};

use axum::Router;
use infrastructure::ServerConfig;
use tokio::{net::TcpListener, signal, sync::Notify};
use tracing::{info, warn};

/// Bind the configured address and serve until SIGINT or SIGTERM
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(router: Router, config: &ServerConfig) -> std::io::Result<()> {
    let listener = TcpListener::bind(config.bind_address()).await?;
    serve_with_shutdown(listener, router, config.shutdown_timeout(), shutdown_signal()).await
}

/// Serve on an already bound listener until `signal` resolves
///
/// After the signal, in-flight requests get `drain_timeout` to finish;
/// whatever is still open then is dropped.
///
/// # Errors
///
/// Returns an error if the listener address cannot be read or the server
/// fails.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    router: Router,
    drain_timeout: Duration,
    signal: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!(%addr, "Server listening");

    let draining = Arc::new(Notify::new());
    let trigger = Arc::clone(&draining);
    let server = axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            signal.await;
            trigger.notify_one();
        })
        .into_future();

    tokio::select! {
        result = server => result?,
        () = async {
            draining.notified().await;
            tokio::time::sleep(drain_timeout).await;
        } => {
            warn!(timeout = ?drain_timeout, "Drain timeout elapsed, dropping open connections");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}

/// Wait for SIGINT or SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}

#[cfg(test)]
mod tests {
    use axum::routing::get;
    use tokio::sync::oneshot;

    use super::*;

    #[tokio::test]
    async fn stops_when_signal_fires() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let router = Router::new().route("/", get(|| async { "ok" }));
        let (tx, rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(serve_with_shutdown(
            listener,
            router,
            Duration::from_secs(1),
            async move {
                let _ = rx.await;
            },
        ));

        tx.send(()).unwrap();
        let result = tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .unwrap()
            .unwrap();
        tokio_test::assert_ok!(result);
    }
}
