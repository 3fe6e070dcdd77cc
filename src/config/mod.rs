// src/config/mod.rs
pub mod types;

pub use self::types::{Config, EngineConfig, OutputConfig, OutputFormat};
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "pagerank.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `pagerank.toml` from `dir`, or defaults when the file is absent.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::new());
        }
        Self::load_file(&path)
    }

    /// Loads an explicit config file.
    ///
    /// # Errors
    /// Returns error if the file is missing or the TOML is invalid.
    pub fn load_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("Config file not found: {}", path.display());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::parse_toml(&content).with_context(|| format!("Invalid TOML in {}", path.display()))
    }

    /// # Errors
    /// Returns error if `content` is not a valid config document.
    pub fn parse_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{EndpointPolicy, ParallelEdgePolicy};

    #[test]
    fn empty_document_gives_defaults() {
        assert_eq!(Config::parse_toml("").unwrap(), Config::default());
    }

    #[test]
    fn policies_parse_lowercase() {
        let c = Config::parse_toml(
            "[engine]\nunknown_endpoints = \"reject\"\nparallel_edges = \"collapse\"",
        )
        .unwrap();
        assert_eq!(c.engine.unknown_endpoints, EndpointPolicy::Reject);
        assert_eq!(c.engine.parallel_edges, ParallelEdgePolicy::Collapse);
        assert_eq!(c.engine.max_iterations, 100);
    }

    #[test]
    fn unknown_policy_is_an_error() {
        assert!(Config::parse_toml("[engine]\nparallel_edges = \"merge\"").is_err());
    }
}
