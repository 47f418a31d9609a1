use serde::Deserialize;

/// Top-level server configuration, loaded from `gamerack.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address the server binds, e.g. `0.0.0.0:8000`.
    pub listen_addr: String,
    /// Directory every request path resolves against: static files, the
    /// `games/` scan, and sound listings alike.
    pub web_root: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
            web_root: ".".to_string(),
        }
    }
}

impl ServerConfig {
    /// Validate configuration, logging warnings for issues.
    pub fn validate(&self) {
        if self.listen_addr.parse::<std::net::SocketAddr>().is_err() {
            tracing::error!(
                addr = %self.listen_addr,
                "listen_addr is not a valid socket address"
            );
            std::process::exit(1);
        }

        if !std::path::Path::new(&self.web_root).is_dir() {
            tracing::warn!(
                root = %self.web_root,
                "web_root is not an existing directory, requests will fail until it is created"
            );
        }
    }

    /// Load config from `gamerack.toml` if it exists, then apply env var overrides.
    pub fn load() -> Self {
        let mut config = match std::fs::read_to_string("gamerack.toml") {
            Ok(content) => match toml::from_str::<ServerConfig>(&content) {
                Ok(cfg) => {
                    tracing::info!("Loaded configuration from gamerack.toml");
                    cfg
                },
                Err(e) => {
                    tracing::warn!("Failed to parse gamerack.toml: {e}, using defaults");
                    ServerConfig::default()
                },
            },
            Err(_) => {
                tracing::info!("No gamerack.toml found, using defaults");
                ServerConfig::default()
            },
        };

        // Environment variable overrides
        if let Ok(addr) = std::env::var("GAMERACK_LISTEN_ADDR")
            && !addr.is_empty()
        {
            config.listen_addr = addr;
        }
        if let Ok(root) = std::env::var("GAMERACK_WEB_ROOT")
            && !root.is_empty()
        {
            config.web_root = root;
        }

        config
    }
}
