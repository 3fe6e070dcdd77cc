use serde::{Deserialize, Serialize};

use crate::graph::{BuildOptions, EndpointPolicy, ParallelEdgePolicy};
use crate::rank::pagerank::{RankParams, DEFAULT_DAMPING, DEFAULT_ITERATIONS};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_damping")]
    pub damping_factor: f64,
    #[serde(default = "default_iterations")]
    pub max_iterations: usize,
    #[serde(default)]
    pub unknown_endpoints: EndpointPolicy,
    #[serde(default)]
    pub parallel_edges: ParallelEdgePolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            damping_factor: default_damping(),
            max_iterations: default_iterations(),
            unknown_endpoints: EndpointPolicy::default(),
            parallel_edges: ParallelEdgePolicy::default(),
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn params(&self) -> RankParams {
        RankParams {
            damping_factor: self.damping_factor,
            max_iterations: self.max_iterations,
        }
    }

    #[must_use]
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            unknown_endpoints: self.unknown_endpoints,
            parallel_edges: self.parallel_edges,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            precision: default_precision(),
        }
    }
}

const fn default_damping() -> f64 { DEFAULT_DAMPING }
const fn default_iterations() -> usize { DEFAULT_ITERATIONS }
const fn default_precision() -> usize { 6 }
