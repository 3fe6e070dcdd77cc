// src/graph/adjacency.rs
//! Immutable adjacency structure used for rank propagation.

use std::collections::HashMap;

/// One out-neighbor entry.
///
/// Unknown targets are kept so the out-degree matches the input; the rank
/// they receive has nowhere to land and is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Known(usize),
    Unknown(String),
}

/// How a vertex passes its rank on during one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Links<'a> {
    /// Split evenly across these entries, repeats included.
    Outgoing(&'a [Target]),
    /// No out-edges: spread over every vertex.
    Dangling,
}

/// Vertex-indexed adjacency in input order.
#[derive(Debug, Clone, Default)]
pub struct Adjacency {
    vertices: Vec<String>,
    index: HashMap<String, usize>,
    out: Vec<Vec<Target>>,
}

impl Adjacency {
    pub(crate) fn with_vertices(vertices: Vec<String>, index: HashMap<String, usize>) -> Self {
        let out = vec![Vec::new(); vertices.len()];
        Self {
            vertices,
            index,
            out,
        }
    }

    pub(crate) fn push(&mut self, source: usize, target: Target) {
        if let Some(list) = self.out.get_mut(source) {
            list.push(target);
        }
    }

    #[must_use]
    pub fn vertices(&self) -> &[String] {
        &self.vertices
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Number of adjacency entries across all vertices.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.out.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn out_degree(&self, index: usize) -> usize {
        self.out.get(index).map_or(0, Vec::len)
    }

    #[must_use]
    pub fn links(&self, index: usize) -> Links<'_> {
        match self.out.get(index) {
            Some(targets) if !targets.is_empty() => Links::Outgoing(targets),
            _ => Links::Dangling,
        }
    }

    /// Out-neighbor identifiers of `id` in encounter order.
    #[must_use]
    pub fn out_neighbors(&self, id: &str) -> Option<Vec<&str>> {
        let index = self.index_of(id)?;
        let targets = self.out.get(index)?;
        Some(targets.iter().map(|t| self.target_name(t)).collect())
    }

    /// Indices of vertices with no out-edges.
    #[must_use]
    pub fn dangling(&self) -> Vec<usize> {
        (0..self.len())
            .filter(|&i| matches!(self.links(i), Links::Dangling))
            .collect()
    }

    /// Entries pointing outside the vertex set.
    #[must_use]
    pub fn unknown_target_count(&self) -> usize {
        self.out
            .iter()
            .flatten()
            .filter(|t| matches!(t, Target::Unknown(_)))
            .count()
    }

    fn target_name<'a>(&'a self, target: &'a Target) -> &'a str {
        match target {
            Target::Known(i) => self.vertices.get(*i).map_or("", String::as_str),
            Target::Unknown(name) => name,
        }
    }
}
