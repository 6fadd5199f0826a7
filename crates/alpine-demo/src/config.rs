//! Configuration loading and management.

use crate::cli::Args;
use crate::error::{DemoError, DemoResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One year, the usual lifetime for a versioned static script.
const DEFAULT_CACHE_MAX_AGE: u64 = 31_536_000;

/// Configuration for the demo server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DemoConfig {
    /// Address to bind.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// `Cache-Control: max-age` for the Alpine.js script.
    pub cache_max_age: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            cache_max_age: DEFAULT_CACHE_MAX_AGE,
        }
    }
}

impl DemoConfig {
    /// Load configuration from CLI arguments and an optional config file.
    ///
    /// Flags given on the command line win over the file.
    pub fn load(args: &Args) -> DemoResult<Self> {
        let mut config = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(host) = &args.host {
            config.host = host.clone();
        }
        if let Some(port) = args.port {
            config.port = port;
        }
        if let Some(max_age) = args.cache_max_age {
            config.cache_max_age = max_age;
        }

        Ok(config)
    }

    /// Read a JSON config file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> DemoResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| DemoError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| DemoError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// `host:port` for binding.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Value for the script's `Cache-Control` header.
    pub fn cache_control(&self) -> String {
        format!("public, max-age={}", self.cache_max_age)
    }
}
