//! Error types for the demo server.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for demo operations.
pub type DemoResult<T> = Result<T, DemoError>;

/// An error that stops the demo server from starting.
#[derive(Debug, Error, Diagnostic)]
pub enum DemoError {
    /// The config file could not be read.
    #[error("Failed to read {}", .path.display())]
    #[diagnostic(code(alpine_demo::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON for [`crate::config::DemoConfig`].
    #[error("Failed to parse {}", .path.display())]
    #[diagnostic(
        code(alpine_demo::config),
        help("expected keys: host, port, cacheMaxAge")
    )]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The listen address could not be bound.
    #[error("Failed to listen on {addr}")]
    #[diagnostic(code(alpine_demo::bind), help("is another process using the port?"))]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("Server error")]
    #[diagnostic(code(alpine_demo::serve))]
    Serve(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_error_message() {
        let err = DemoError::Bind {
            addr: "127.0.0.1:8080".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::AddrInUse),
        };
        assert_eq!(err.to_string(), "Failed to listen on 127.0.0.1:8080");
        assert_eq!(err.code().unwrap().to_string(), "alpine_demo::bind");
    }
}
