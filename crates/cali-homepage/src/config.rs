//! Server configuration
//!
//! Settings come from an optional TOML file, then command-line flags
//! override individual values.
//!
//! ```toml
//! bind_addr = "0.0.0.0:8787"
//! dataset_path = "/srv/cali/countries.json"
//! smaller_host_marker = "smallerthancali"
//!
//! [log]
//! default_level = "info"
//! ```

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use cali_core::Dataset;
use cali_logging::LogConfig;
use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Default listen address
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8787";

/// Host substring that selects the "smaller" site flavor
pub const DEFAULT_SMALLER_HOST_MARKER: &str = "smallerthancali";

/// Configuration for the homepage server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind_addr: SocketAddr,
    /// Dataset document to serve; the embedded dataset when unset
    pub dataset_path: Option<PathBuf>,
    /// Host substring that switches to the "smaller" flavor
    pub smaller_host_marker: String,
    /// Logging configuration
    pub log: LogConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8787)),
            dataset_path: None,
            smaller_host_marker: DEFAULT_SMALLER_HOST_MARKER.to_string(),
            log: LogConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(text: &str) -> ServerResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> ServerResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            ServerError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }

    /// Load the file named on the command line (if any) and apply overrides
    pub fn from_cli(cli: &Cli) -> ServerResult<Self> {
        let config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        Ok(config.with_overrides(cli))
    }

    /// Apply command-line overrides on top of this configuration
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(addr) = cli.bind {
            self.bind_addr = addr;
        }
        if let Some(path) = &cli.dataset {
            self.dataset_path = Some(path.clone());
        }
        if let Some(level) = &cli.log_level {
            self.log.default_level = level.clone();
        }
        if cli.pretty {
            self.log.console.pretty = true;
            self.log.console.ansi = true;
        }
        self
    }

    /// Set the listen address
    pub fn with_bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }

    /// Set the dataset path
    pub fn with_dataset_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dataset_path = Some(path.into());
        self
    }

    /// Set the "smaller" host marker
    pub fn with_smaller_host_marker(mut self, marker: impl Into<String>) -> Self {
        self.smaller_host_marker = marker.into();
        self
    }

    /// Load the configured dataset
    pub fn load_dataset(&self) -> ServerResult<Dataset> {
        let dataset = match &self.dataset_path {
            Some(path) => Dataset::load(path)?,
            None => Dataset::embedded()?,
        };
        Ok(dataset)
    }
}

/// Command-line arguments
#[derive(Debug, Default, Parser)]
#[command(
    name = "biggerthancali",
    about = "Compare any country's population, GDP and land area to California"
)]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,
    /// Address to listen on (default 127.0.0.1:8787)
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    /// Dataset JSON produced by the fetch step
    #[arg(long)]
    pub dataset: Option<PathBuf>,
    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,
    /// Human-readable console logs instead of JSONL
    #[arg(long)]
    pub pretty: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert!(config.dataset_path.is_none());
        assert_eq!(config.smaller_host_marker, "smallerthancali");
    }

    #[test]
    fn test_partial_toml() {
        let config = ServerConfig::from_toml_str(
            r#"
            bind_addr = "0.0.0.0:9000"

            [log]
            default_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.log.default_level, "debug");
        assert_eq!(config.smaller_host_marker, DEFAULT_SMALLER_HOST_MARKER);
    }

    #[test]
    fn test_invalid_toml() {
        let err = ServerConfig::from_toml_str("bind_addr = \"not an address\"").unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ServerConfig::load("/nonexistent/cali.toml").unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }

    #[test]
    fn test_cli_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cali.toml");
        std::fs::write(
            &path,
            "bind_addr = \"0.0.0.0:9000\"\nsmaller_host_marker = \"tiny\"\n",
        )
        .unwrap();

        let cli = Cli::parse_from([
            "biggerthancali",
            "--config",
            path.to_str().unwrap(),
            "--bind",
            "127.0.0.1:1234",
            "--log-level",
            "trace",
            "--pretty",
        ]);
        let config = ServerConfig::from_cli(&cli).unwrap();

        assert_eq!(config.bind_addr.port(), 1234);
        assert_eq!(config.smaller_host_marker, "tiny");
        assert_eq!(config.log.default_level, "trace");
        assert!(config.log.console.pretty);
    }

    #[test]
    fn test_load_dataset_embedded_and_from_path() {
        let embedded = ServerConfig::default().load_dataset().unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("countries.json");
        std::fs::write(&path, cali_core::EMBEDDED_DATASET).unwrap();
        let from_file = ServerConfig::default()
            .with_dataset_path(&path)
            .load_dataset()
            .unwrap();

        assert_eq!(embedded.len(), from_file.len());
    }

    #[test]
    fn test_load_dataset_missing_file() {
        let err = ServerConfig::default()
            .with_dataset_path("/nonexistent/countries.json")
            .load_dataset()
            .unwrap_err();
        assert!(matches!(err, ServerError::Dataset(_)));
    }
}
