//! Command-line argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Serve a todo page built with Alpine.js attribute helpers
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "alpine-demo")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Path to a JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Cache-Control max-age for the Alpine.js script, in seconds
    #[arg(long)]
    pub cache_max_age: Option<u64>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Default log filter when `RUST_LOG` is unset.
    pub fn default_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let args = Args::parse_from([
            "alpine-demo",
            "--host",
            "0.0.0.0",
            "-p",
            "3000",
            "--cache-max-age",
            "60",
            "-v",
        ]);
        assert_eq!(args.host.as_deref(), Some("0.0.0.0"));
        assert_eq!(args.port, Some(3000));
        assert_eq!(args.cache_max_age, Some(60));
        assert_eq!(args.default_filter(), "debug");
    }

    #[test]
    fn test_defaults_are_unset() {
        let args = Args::parse_from(["alpine-demo"]);
        assert!(args.host.is_none());
        assert!(args.port.is_none());
        assert!(args.config.is_none());
        assert_eq!(args.default_filter(), "info");
    }
}
