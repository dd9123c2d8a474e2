use serde::Deserialize;

/// Top-level server configuration, loaded from `flashdeck.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    /// Directory holding the hand-authored site (landing page, player shell).
    pub web_root: String,
    /// Flat directory of `<slug>.swf` files.
    pub games_dir: String,
    /// Authored catalog of titles, loaded once at startup.
    pub catalog_path: String,
    pub limits: LimitsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            web_root: "web".to_string(),
            games_dir: "games".to_string(),
            catalog_path: "games.toml".to_string(),
            limits: LimitsConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Per-request timeout for every route, including asset reads.
    pub request_timeout_secs: u64,
    /// Largest asset the server will read into memory and serve.
    pub max_asset_bytes: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 30,
            // The largest title in the original catalog is ~20 MB; 64 MB
            // leaves room without letting one file exhaust the host.
            max_asset_bytes: 64 * 1024 * 1024,
        }
    }
}

impl ServerConfig {
    /// Validate configuration, exiting on errors a running server cannot
    /// recover from.
    pub fn validate(&self) {
        if self.listen_addr.parse::<std::net::SocketAddr>().is_err() {
            tracing::error!(
                addr = %self.listen_addr,
                "listen_addr is not a valid socket address"
            );
            std::process::exit(1);
        }
        if self.limits.request_timeout_secs == 0 {
            tracing::error!("limits.request_timeout_secs must be > 0");
            std::process::exit(1);
        }
        if self.limits.max_asset_bytes == 0 {
            tracing::error!("limits.max_asset_bytes must be > 0");
            std::process::exit(1);
        }

        // A missing games dir is an operator hint, not a startup failure:
        // every title will 404 with its expected path until files arrive.
        if !std::path::Path::new(&self.games_dir).is_dir() {
            tracing::warn!(
                dir = %self.games_dir,
                "games directory does not exist yet; all titles will report as missing"
            );
        }
    }

    /// Load config from `flashdeck.toml` if it exists, then apply env var
    /// overrides.
    pub fn load() -> Self {
        let mut config = match std::fs::read_to_string("flashdeck.toml") {
            Ok(content) => match toml::from_str::<ServerConfig>(&content) {
                Ok(cfg) => {
                    tracing::info!("Loaded configuration from flashdeck.toml");
                    cfg
                },
                Err(e) => {
                    tracing::warn!("Failed to parse flashdeck.toml: {e}, using defaults");
                    ServerConfig::default()
                },
            },
            Err(_) => {
                tracing::info!("No flashdeck.toml found, using defaults");
                ServerConfig::default()
            },
        };

        if let Ok(addr) = std::env::var("FLASHDECK_LISTEN_ADDR")
            && !addr.is_empty()
        {
            config.listen_addr = addr;
        }
        if let Ok(root) = std::env::var("FLASHDECK_WEB_ROOT")
            && !root.is_empty()
        {
            config.web_root = root;
        }
        if let Ok(dir) = std::env::var("FLASHDECK_GAMES_DIR")
            && !dir.is_empty()
        {
            config.games_dir = dir;
        }
        if let Ok(path) = std::env::var("FLASHDECK_CATALOG")
            && !path.is_empty()
        {
            config.catalog_path = path;
        }
        if let Ok(val) = std::env::var("FLASHDECK_REQUEST_TIMEOUT_SECS")
            && let Ok(n) = val.parse::<u64>()
        {
            config.limits.request_timeout_secs = n;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.listen_addr, "0.0.0.0:8080");
        assert_eq!(cfg.web_root, "web");
        assert_eq!(cfg.games_dir, "games");
        assert_eq!(cfg.catalog_path, "games.toml");
        assert_eq!(cfg.limits.request_timeout_secs, 30);
    }

    #[test]
    fn parse_minimal_toml() {
        let toml_str = r#"
listen_addr = "127.0.0.1:9090"
games_dir = "/srv/games"
"#;
        let cfg: ServerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.listen_addr, "127.0.0.1:9090");
        assert_eq!(cfg.games_dir, "/srv/games");
        // Unspecified sections keep defaults
        assert_eq!(cfg.web_root, "web");
        assert_eq!(cfg.limits.max_asset_bytes, 64 * 1024 * 1024);
    }

    #[test]
    fn parse_limits_toml() {
        let toml_str = r#"
[limits]
request_timeout_secs = 5
max_asset_bytes = 1048576
"#;
        let cfg: ServerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.limits.request_timeout_secs, 5);
        assert_eq!(cfg.limits.max_asset_bytes, 1_048_576);
    }

    #[test]
    fn validate_rejects_invalid_addr() {
        let cfg = ServerConfig {
            listen_addr: "not-an-address".to_string(),
            ..ServerConfig::default()
        };
        // validate() calls process::exit, so test the underlying check
        assert!(cfg.listen_addr.parse::<std::net::SocketAddr>().is_err());
    }
}
