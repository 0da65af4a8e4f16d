//! Server configuration
//!
//! Resolved once at startup from environment variables, with defaults that
//! work for local development:
//!
//! - `PULSE_ADDR` - listen address (default `127.0.0.1:8080`)
//! - `PULSE_DATA_PATH` - event journal file (default `data/events.jsonl`)
//! - `PULSE_ASSETS_DIR` - static asset directory (default `public`)

use std::env;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Runtime configuration for the server binary.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    pub addr: SocketAddr,
    /// Path to the append-only event journal
    pub data_path: PathBuf,
    /// Directory served for unmatched paths
    pub assets_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            data_path: PathBuf::from("data/events.jsonl"),
            assets_dir: PathBuf::from("public"),
        }
    }
}

impl ServerConfig {
    /// Resolve configuration from the environment. An unparseable
    /// `PULSE_ADDR` falls back to the default with a warning rather than
    /// refusing to start.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let addr = match env::var("PULSE_ADDR") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                eprintln!(
                    "Warning: PULSE_ADDR '{}' is not a valid address, using {}",
                    raw, defaults.addr
                );
                defaults.addr
            }),
            Err(_) => defaults.addr,
        };

        let data_path = env::var("PULSE_DATA_PATH")
            .map(|p| resolve(&p))
            .unwrap_or(defaults.data_path);

        let assets_dir = env::var("PULSE_ASSETS_DIR")
            .map(|p| resolve(&p))
            .unwrap_or(defaults.assets_dir);

        Self {
            addr,
            data_path,
            assets_dir,
        }
    }
}

/// Resolve a possibly-relative path against the current directory.
fn resolve(path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    }
}
