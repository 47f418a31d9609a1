use tracing_subscriber::EnvFilter;

use gamerack::build_app;
use gamerack::config::ServerConfig;
use gamerack::server::{Server, wait_for_signal};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = ServerConfig::load();
    config.validate();

    let server = Server::bind(&config.listen_addr).await?;
    let addr = server.local_addr()?;
    let handle = server.handle();

    tokio::spawn(async move {
        wait_for_signal().await;
        tracing::info!("Shutdown signal received, draining");
        handle.stop();
    });

    tracing::info!(%addr, root = %config.web_root, "gamerack listening");

    let app = build_app(config);
    server.serve(app).await?;

    tracing::info!("Server stopped");
    Ok(())
}
