use std::path::Path;
use std::sync::Arc;

use tower_http::services::ServeDir;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    assets: ServeDir,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let assets = ServeDir::new(&config.web_root).append_index_html_on_directories(true);
        Self {
            config: Arc::new(config),
            assets,
        }
    }

    /// Directory every request path resolves against.
    pub fn web_root(&self) -> &Path {
        Path::new(&self.config.web_root)
    }

    /// Fresh copy of the static file service for a single oneshot call.
    pub(crate) fn assets(&self) -> ServeDir {
        self.assets.clone()
    }
}
