//! HTTP server implementation

use crate::error::ServerError;
use crate::handlers::{route, AppState};
use http::StatusCode;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;
use std::time::Instant;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

/// Validation server
pub struct Server {
    state: AppState,
}

impl Server {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Bind and serve until the process exits.
    pub async fn run(self, addr: SocketAddr) -> Result<(), ServerError> {
        self.run_until(addr, std::future::pending()).await
    }

    /// Bind and serve until `shutdown` completes.
    ///
    /// In-flight connections are left to finish on their own tasks.
    pub async fn run_until<F>(self, addr: SocketAddr, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()>,
    {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;
        let local = listener.local_addr().unwrap_or(addr);

        info!(
            addr = %local,
            config = %self.state.validator.config(),
            "fieldcheck server running on http://{}",
            local
        );

        tokio::pin!(shutdown);

        loop {
            let accepted = tokio::select! {
                accepted = listener.accept() => accepted,
                _ = &mut shutdown => {
                    info!("shutdown signal received");
                    return Ok(());
                }
            };
            let Some((stream, remote_addr)) = connection(accepted) else {
                continue;
            };

            let io = TokioIo::new(stream);
            let state = self.state;

            tokio::spawn(async move {
                let service = service_fn(move |req: hyper::Request<Incoming>| async move {
                    Ok::<_, Infallible>(handle_request(state, req, remote_addr).await)
                });

                if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                    error!("Connection error: {}", err);
                }
            });
        }
    }
}

/// Unwrap an accepted connection.
///
/// Accept failures (file descriptor exhaustion, aborted handshakes) only
/// affect that one connection, so they are logged and the loop goes on.
fn connection<T>(accepted: std::io::Result<T>) -> Option<T> {
    match accepted {
        Ok(conn) => Some(conn),
        Err(err) => {
            warn!(error = %err, "failed to accept connection");
            None
        }
    }
}

/// Handle a single HTTP request
async fn handle_request(
    state: AppState,
    req: hyper::Request<Incoming>,
    remote_addr: SocketAddr,
) -> crate::error::Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let start = Instant::now();

    let response = route(state, req).await;

    log_request(&method, &path, response.status(), remote_addr, start);
    response
}

/// Log request completion
fn log_request(
    method: &http::Method,
    path: &str,
    status: StatusCode,
    remote_addr: SocketAddr,
    start: Instant,
) {
    let elapsed = start.elapsed();

    if status.is_success() {
        info!(
            method = %method,
            path = %path,
            status = %status.as_u16(),
            remote = %remote_addr,
            duration_ms = %elapsed.as_millis(),
            "Request completed"
        );
    } else if status.is_client_error() {
        warn!(
            method = %method,
            path = %path,
            status = %status.as_u16(),
            remote = %remote_addr,
            duration_ms = %elapsed.as_millis(),
            "Request rejected"
        );
    } else {
        error!(
            method = %method,
            path = %path,
            status = %status.as_u16(),
            remote = %remote_addr,
            duration_ms = %elapsed.as_millis(),
            "Request failed"
        );
    }
}
