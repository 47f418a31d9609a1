use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use tempfile::TempDir;

use gamerack::build_app;
use gamerack::config::ServerConfig;

pub struct TestServer {
    pub addr: SocketAddr,
    _shutdown: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Start a server over the given web root on an ephemeral port.
    pub async fn serve(web_root: &Path) -> Self {
        let config = ServerConfig {
            listen_addr: "127.0.0.1:0".to_string(),
            web_root: web_root.display().to_string(),
        };

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let app = build_app(config);
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the server a moment to start accepting
        tokio::time::sleep(Duration::from_millis(20)).await;

        Self {
            addr,
            _shutdown: handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }
}

/// A web root assembled in a tempdir.
///
/// The directory and everything in it disappear when the value drops, so
/// tests must keep it alive for as long as the server uses it.
pub struct AssetTree {
    root: TempDir,
}

impl AssetTree {
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Create `games/<name>/data/config.json`, making `name` an installed game.
    pub fn add_game(&self, name: &str) {
        let data = self.root.path().join("games").join(name).join("data");
        std::fs::create_dir_all(&data).unwrap();
        std::fs::write(data.join("config.json"), b"{}").unwrap();
    }

    /// Create `games/<name>` without the marker file.
    pub fn add_bare_game_dir(&self, name: &str) {
        std::fs::create_dir_all(self.root.path().join("games").join(name)).unwrap();
    }

    /// Write a file under the root, creating parent directories as needed.
    pub fn add_file(&self, rel: &str, contents: &[u8]) {
        let path = self.root.path().join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }

    pub fn add_dir(&self, rel: &str) {
        std::fs::create_dir_all(self.root.path().join(rel)).unwrap();
    }
}
