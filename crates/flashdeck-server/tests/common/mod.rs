use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use flashdeck_core::catalog::Catalog;
use flashdeck_server::build_app;
use flashdeck_server::config::{LimitsConfig, ServerConfig};

/// Catalog used by most tests: the slugs the scenarios care about.
pub const TEST_CATALOG: &str = r#"
[[games]]
slug = "copter"
title = "Helicopter Game"

[[games]]
slug = "fishy"

[[games]]
slug = "bowman"
"#;

pub struct TestServer {
    pub addr: SocketAddr,
    pub games_dir: PathBuf,
    _shutdown: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Start a server on an ephemeral port with a fresh empty games dir.
    pub async fn new() -> Self {
        Self::with_catalog(TEST_CATALOG).await
    }

    pub async fn with_catalog(catalog_toml: &str) -> Self {
        let root = std::env::temp_dir().join(format!("flashdeck-test-{}", uuid::Uuid::new_v4()));
        let games_dir = root.join("games");
        let web_root = root.join("web");
        std::fs::create_dir_all(&games_dir).unwrap();
        std::fs::create_dir_all(&web_root).unwrap();
        std::fs::write(web_root.join("index.html"), "<!DOCTYPE html><title>deck</title>").unwrap();

        let config = ServerConfig {
            listen_addr: "127.0.0.1:0".to_string(),
            web_root: web_root.to_string_lossy().into_owned(),
            games_dir: games_dir.to_string_lossy().into_owned(),
            catalog_path: String::new(), // catalog passed in directly below
            limits: LimitsConfig::default(),
        };
        let catalog = Catalog::from_toml_str(catalog_toml).unwrap();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (app, _state) = build_app(config, catalog);
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the server a moment to start accepting
        tokio::time::sleep(Duration::from_millis(20)).await;

        Self {
            addr,
            games_dir,
            _shutdown: handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Drop a minimal valid SWF (FWS header plus padding) into the games dir.
    pub fn write_swf(&self, file_name: &str) {
        let mut bytes = b"FWS".to_vec();
        bytes.push(6);
        bytes.extend_from_slice(&64u32.to_le_bytes());
        bytes.extend_from_slice(&[0u8; 56]);
        self.write_bytes(file_name, &bytes);
    }

    pub fn write_bytes(&self, file_name: &str, bytes: &[u8]) {
        std::fs::write(Path::new(&self.games_dir).join(file_name), bytes).unwrap();
    }
}
