use std::io;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;
use crate::http::handler::RequestHandler;

const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

pub async fn run<H: RequestHandler>(cfg: &Config, handler: Arc<H>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(cfg.listen_addr()).await?;
    info!("Listening on {}", listener.local_addr()?);

    serve(listener, handler).await
}

/// Accepts connections forever, one task per connection.
///
/// A failed accept is dropped without a response, since there is no channel
/// to answer on. Errors inside a connection task stay in that task.
pub async fn serve<H: RequestHandler>(listener: TcpListener, handler: Arc<H>) -> anyhow::Result<()> {
    loop {
        let Some((socket, peer)) = accepted_or_backoff(listener.accept().await).await else {
            continue;
        };
        tracing::debug!("Server contacted by {}", peer);

        let handler = Arc::clone(&handler);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, handler);
            if let Err(e) = conn.run().await {
                tracing::debug!(%peer, "Connection error: {}", e);
            }
        });
    }
}

/// Passes an accepted connection through, or logs the error and pauses.
///
/// Persistent failures (e.g. out of file descriptors) would otherwise make
/// the accept loop spin.
async fn accepted_or_backoff<T>(result: io::Result<T>) -> Option<T> {
    match result {
        Ok(accepted) => Some(accepted),
        Err(e) => {
            tracing::debug!(error = %e, "Failed to accept connection");
            tokio::time::sleep(ACCEPT_BACKOFF).await;
            None
        }
    }
}
