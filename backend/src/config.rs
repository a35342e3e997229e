//! Runtime configuration.
//!
//! Values start from `Config::default()` and are overridden by `SHELF_*`
//! environment variables. A `.env` file in the working directory is loaded
//! first when present.

use log::{info, warn};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
}

/// Listener and request body settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Maximum size of JSON and urlencoded bodies, in bytes.
    pub body_limit: usize,
}

/// Locations of the SQLite database, the uploads and the static frontend.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub database_path: PathBuf,
    pub upload_dir: PathBuf,
    /// Served under `/static` and `/` when the directory exists.
    pub static_dir: PathBuf,
    /// Maximum size of a single uploaded file, in bytes.
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                body_limit: 10 * 1024 * 1024, // 10 MB
            },
            storage: StorageConfig {
                database_path: PathBuf::from("app.db"),
                upload_dir: PathBuf::from("uploads"),
                static_dir: PathBuf::from("static"),
                max_upload_bytes: 50 * 1024 * 1024, // 50 MB
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(host) = std::env::var("SHELF_HOST") {
            config.server.host = host;
        }
        parse_var("SHELF_PORT", &mut config.server.port);
        parse_var("SHELF_JSON_LIMIT", &mut config.server.body_limit);

        if let Ok(path) = std::env::var("SHELF_DATABASE_PATH") {
            config.storage.database_path = PathBuf::from(path);
        }
        if let Ok(dir) = std::env::var("SHELF_UPLOAD_DIR") {
            config.storage.upload_dir = PathBuf::from(dir);
        }
        if let Ok(dir) = std::env::var("SHELF_STATIC_DIR") {
            config.storage.static_dir = PathBuf::from(dir);
        }
        parse_var("SHELF_MAX_UPLOAD_BYTES", &mut config.storage.max_upload_bytes);

        info!(
            "Database at {:?}, uploads in {:?}",
            config.storage.database_path, config.storage.upload_dir
        );

        config
    }

    pub fn bind_url(&self) -> String {
        format!("http://{}:{}", self.server.host, self.server.port)
    }
}

/// Overwrites `target` with the parsed variable, keeping the default when the
/// variable is unset or does not parse.
fn parse_var<T: FromStr>(name: &str, target: &mut T) {
    if let Ok(raw) = std::env::var(name) {
        match raw.trim().parse() {
            Ok(value) => *target = value,
            Err(_) => warn!("Ignoring {}={:?}: not a valid number", name, raw),
        }
    }
}
