//! Configuration management for the Nightshade bridge
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files and CLI overrides.

use crate::cli::Cli;
use crate::error::{BridgeError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Main configuration structure for the bridge
///
/// Holds everything needed to reach the MCP server: the endpoint URL and
/// the per-request timeout. Every field has a serde default so that a
/// missing or partial YAML file deserializes cleanly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// MCP server endpoint (POST target)
    #[serde(default = "default_endpoint")]
    pub endpoint: url::Url,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> url::Url {
    // The URL literal is fixed and well-formed.
    url::Url::parse("http://localhost:8787/mcp").expect("default endpoint is a valid URL")
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file, then apply CLI overrides
    ///
    /// A missing file is not an error: the defaults are used so that the
    /// binary works out of the box against a local editor. An existing file
    /// that fails to parse is an error.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the YAML configuration file
    /// * `cli` - Parsed CLI arguments; `--endpoint` takes precedence over
    ///   the file value
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>, cli: &Cli) -> Result<Self> {
        let path = path.as_ref();

        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            serde_yaml::from_str(&contents).map_err(BridgeError::Yaml)?
        } else {
            tracing::debug!("no config file at {}, using defaults", path.display());
            Config::default()
        };

        if let Some(endpoint) = &cli.endpoint {
            config.endpoint = endpoint.clone();
        }

        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Config`] if the endpoint scheme is not
    /// `http`/`https` or the timeout is zero.
    pub fn validate(&self) -> Result<()> {
        match self.endpoint.scheme() {
            "http" | "https" => {}
            other => {
                return Err(BridgeError::Config(format!(
                    "unsupported endpoint scheme '{}': expected http or https",
                    other
                ))
                .into());
            }
        }

        if self.timeout_secs == 0 {
            return Err(BridgeError::Config("timeout_secs must be non-zero".to_string()).into());
        }

        Ok(())
    }

    /// The request timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn cli_with_endpoint(endpoint: Option<&str>) -> Cli {
        Cli {
            config: None,
            endpoint: endpoint.map(|e| url::Url::parse(e).unwrap()),
            verbose: false,
            command: None,
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.endpoint.as_str(), "http://localhost:8787/mcp");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let cli = cli_with_endpoint(None);
        let config = Config::load("/nonexistent/bridge.yaml", &cli).unwrap();
        assert_eq!(config.endpoint.as_str(), "http://localhost:8787/mcp");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_load_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "endpoint: \"http://editor-host:9000/mcp\"").unwrap();
        writeln!(file, "timeout_secs: 10").unwrap();

        let cli = cli_with_endpoint(None);
        let config = Config::load(file.path(), &cli).unwrap();
        assert_eq!(config.endpoint.as_str(), "http://editor-host:9000/mcp");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_load_partial_yaml_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "timeout_secs: 5").unwrap();

        let cli = cli_with_endpoint(None);
        let config = Config::load(file.path(), &cli).unwrap();
        assert_eq!(config.endpoint.as_str(), "http://localhost:8787/mcp");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_cli_endpoint_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "endpoint: \"http://from-file:1111/mcp\"").unwrap();

        let cli = cli_with_endpoint(Some("http://from-cli:2222/mcp"));
        let config = Config::load(file.path(), &cli).unwrap();
        assert_eq!(config.endpoint.as_str(), "http://from-cli:2222/mcp");
    }

    #[test]
    fn test_load_invalid_yaml_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "endpoint: [not, a, url]").unwrap();

        let cli = cli_with_endpoint(None);
        assert!(Config::load(file.path(), &cli).is_err());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = Config {
            timeout_secs: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    fn test_validate_rejects_non_http_scheme() {
        let config = Config {
            endpoint: url::Url::parse("ftp://localhost/mcp").unwrap(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("ftp"));
    }

    #[test]
    fn test_timeout_duration() {
        let config = Config {
            timeout_secs: 7,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(7));
    }
}
