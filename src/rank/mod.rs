// src/rank/mod.rs
pub mod pagerank;
pub mod ranks;

pub use pagerank::{iterate, RankParams};
pub use ranks::RankMap;

use serde::Serialize;

use crate::config::Config;
use crate::error::Result;
use crate::graph::{self, BuildOptions, Edge, GraphInput};

/// Orchestrates graph construction and ranking.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankEngine {
    pub options: BuildOptions,
    pub params: RankParams,
}

impl RankEngine {
    #[must_use]
    pub fn new(options: BuildOptions, params: RankParams) -> Self {
        Self { options, params }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.engine.build_options(), config.engine.params())
    }

    /// Builds the adjacency for `graph` and runs the iteration.
    ///
    /// # Errors
    /// Propagates build errors, `InvalidGraph` first.
    pub fn compute(&self, graph: &GraphInput) -> Result<RankMap> {
        let (adjacency, initial) = graph::build(&graph.vertices, &graph.edges, &self.options)?;
        iterate(&adjacency, initial, &self.params)
    }

    /// Like [`compute`](Self::compute) but returns the full output record.
    ///
    /// # Errors
    /// Same as `compute`.
    pub fn report<'a>(&self, graph: &'a GraphInput) -> Result<RankReport<'a>> {
        let ranks = self.compute(graph)?;
        Ok(RankReport {
            vertices: &graph.vertices,
            edges: &graph.edges,
            total_mass: ranks.total(),
            ranks,
            damping_factor: self.params.damping_factor,
            max_iterations: self.params.max_iterations,
        })
    }
}

/// Serializable result record: the submitted graph, its ranks and the
/// parameters that produced them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankReport<'a> {
    pub vertices: &'a [String],
    pub edges: &'a [Edge],
    pub ranks: RankMap,
    pub damping_factor: f64,
    pub max_iterations: usize,
    pub total_mass: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_uses_camel_case_keys() {
        let g = GraphInput::from_pairs(&["A"], &[]);
        let report = RankEngine::default().report(&g).unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["dampingFactor"], 0.85);
        assert_eq!(value["maxIterations"], 100);
        assert!(value["ranks"]["A"].is_number());
        assert!(value.get("totalMass").is_some());
    }
}
