use std::io;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

/// A bound listener plus the token that drains it.
///
/// `bind` then `serve` is the whole lifecycle. A [`ServerHandle`] taken
/// before `serve` is the only way to stop the accept loop from outside;
/// there is no global shutdown state.
pub struct Server {
    listener: TcpListener,
    shutdown: CancellationToken,
}

/// Cloneable stop capability for a running [`Server`].
#[derive(Clone)]
pub struct ServerHandle {
    shutdown: CancellationToken,
}

impl ServerHandle {
    /// Request shutdown: stop accepting, close idle connections, let
    /// [`Server::serve`] return.
    pub fn stop(&self) {
        self.shutdown.cancel();
    }
}

impl Server {
    /// Bind the listen socket. Accepting starts when `serve` runs.
    pub async fn bind(addr: &str) -> io::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self {
            listener,
            shutdown: CancellationToken::new(),
        })
    }

    /// Address actually bound, useful when the configured port is 0.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    pub fn handle(&self) -> ServerHandle {
        ServerHandle {
            shutdown: self.shutdown.clone(),
        }
    }

    /// Run the accept loop until a handle stops it, then release the socket.
    pub async fn serve(self, app: Router) -> io::Result<()> {
        let shutdown = self.shutdown;
        axum::serve(self.listener, app)
            .with_graceful_shutdown(async move { shutdown.cancelled().await })
            .await
    }
}

/// Resolves when the process receives ctrl-c or, on unix, SIGTERM.
pub async fn wait_for_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut sigint =
            signal(SignalKind::interrupt()).expect("Failed to register SIGINT handler");
        let mut sigterm =
            signal(SignalKind::terminate()).expect("Failed to register SIGTERM handler");
        tokio::select! {
            _ = sigint.recv() => {},
            _ = sigterm.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for Ctrl+C");
    }
}
