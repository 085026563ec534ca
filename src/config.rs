//! Process configuration, read once at startup from the environment
//! (SPEC_FULL.md §4.10).

#![forbid(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("CORROSION_DATA_DIR is not set; pass a data directory or use the embedded catalogs")]
    MissingDataDir,
    #[error("CORROSION_BIND_ADDR '{0}' is not a valid socket address: {1}")]
    InvalidBindAddr(String, std::net::AddrParseError),
}

/// Runtime configuration for the server binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory containing the catalog CSVs, or `None` to use the
    /// catalogs bundled into the binary via `include_str!`.
    pub data_dir: Option<PathBuf>,
    /// Optional upstream PHREEQC-class speciation oracle; unused by this
    /// crate's own Pourbaix evaluator (spec.md §4.9), reserved for a future
    /// high-fidelity backend.
    pub phreeqc_oracle_url: Option<String>,
    pub bind_addr: std::net::SocketAddr,
}

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

impl Config {
    /// Build configuration from environment variables:
    /// - `CORROSION_DATA_DIR` (optional; embedded catalogs used if unset)
    /// - `PHREEQC_ORACLE_URL` (optional)
    /// - `CORROSION_BIND_ADDR` (optional, default `127.0.0.1:8080`)
    ///
    /// `CORROSION_LOG` is read directly by `tracing_subscriber::EnvFilter`
    /// at startup and is not reflected here.
    pub fn from_env() -> Result<Self, ConfigError> {
        let data_dir = std::env::var("CORROSION_DATA_DIR").ok().map(PathBuf::from);
        let phreeqc_oracle_url = std::env::var("PHREEQC_ORACLE_URL").ok();
        let bind_addr_str = std::env::var("CORROSION_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr_str
            .parse()
            .map_err(|e| ConfigError::InvalidBindAddr(bind_addr_str.clone(), e))?;

        Ok(Self { data_dir, phreeqc_oracle_url, bind_addr })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bind_addr_parses() {
        let addr: std::net::SocketAddr = DEFAULT_BIND_ADDR.parse().unwrap();
        assert_eq!(addr.port(), 8080);
    }
}
