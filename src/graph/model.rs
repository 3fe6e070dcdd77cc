// src/graph/model.rs
//! Raw graph input as callers submit it.

use serde::{Deserialize, Serialize};

/// A directed edge between two vertex identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
}

impl Edge {
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// Vertex list plus edge list, in the shape `{"vertices": [..], "edges": [{"from", "to"}]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphInput {
    #[serde(default)]
    pub vertices: Vec<String>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl GraphInput {
    #[must_use]
    pub fn new(vertices: Vec<String>, edges: Vec<Edge>) -> Self {
        Self { vertices, edges }
    }

    /// Convenience constructor used heavily in tests.
    #[must_use]
    pub fn from_pairs(vertices: &[&str], edges: &[(&str, &str)]) -> Self {
        Self {
            vertices: vertices.iter().map(|v| (*v).to_string()).collect(),
            edges: edges.iter().map(|(f, t)| Edge::new(*f, *t)).collect(),
        }
    }

    /// Parses the JSON wire shape.
    ///
    /// # Errors
    /// Returns error if the payload is not valid graph JSON.
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }
}
