// src/error.rs
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RankError {
    #[error("Invalid graph: the vertex set is empty")]
    InvalidGraph,

    #[error("Malformed edge: {from} -> {to} references a vertex outside the graph")]
    MalformedEdge { from: String, to: String },

    #[error("Duplicate vertex identifier: {0}")]
    DuplicateVertex(String),

    #[error("Rank mapping covers {ranks} vertices but the graph has {vertices}")]
    ShapeMismatch { vertices: usize, ranks: usize },
}

impl RankError {
    /// True when the caller supplied a graph the engine refuses, as opposed to
    /// an internal inconsistency.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Self::ShapeMismatch { .. })
    }
}

pub type Result<T> = std::result::Result<T, RankError>;
