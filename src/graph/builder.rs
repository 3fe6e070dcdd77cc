// src/graph/builder.rs
//! Adjacency construction from raw vertex and edge lists.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::adjacency::{Adjacency, Target};
use super::model::Edge;
use crate::error::{RankError, Result};
use crate::rank::RankMap;

/// What to do with edges that reference identifiers outside the vertex set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointPolicy {
    /// Unknown sources are ignored; unknown targets stay in the adjacency and
    /// the rank sent to them is lost.
    #[default]
    Permit,
    /// Any unknown endpoint fails the build with `MalformedEdge`.
    Reject,
}

/// What to do with repeated `(from, to)` pairs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParallelEdgePolicy {
    /// Each occurrence is its own adjacency entry.
    #[default]
    Keep,
    /// Only the first occurrence counts.
    Collapse,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildOptions {
    #[serde(default)]
    pub unknown_endpoints: EndpointPolicy,
    #[serde(default)]
    pub parallel_edges: ParallelEdgePolicy,
}

/// Builds the adjacency structure and the uniform `1/n` starting ranks.
///
/// # Errors
/// `InvalidGraph` on an empty vertex list, `DuplicateVertex` when an
/// identifier repeats, `MalformedEdge` for unknown endpoints under
/// [`EndpointPolicy::Reject`].
pub fn build(
    vertices: &[String],
    edges: &[Edge],
    options: &BuildOptions,
) -> Result<(Adjacency, RankMap)> {
    if vertices.is_empty() {
        return Err(RankError::InvalidGraph);
    }

    let index = index_vertices(vertices)?;
    let mut adjacency = Adjacency::with_vertices(vertices.to_vec(), index);
    add_edges(&mut adjacency, edges, options)?;

    debug!(
        vertices = adjacency.len(),
        entries = adjacency.edge_count(),
        dangling = adjacency.dangling().len(),
        "built adjacency"
    );

    let initial = RankMap::uniform(vertices.to_vec());
    Ok((adjacency, initial))
}

fn index_vertices(vertices: &[String]) -> Result<HashMap<String, usize>> {
    let mut index = HashMap::with_capacity(vertices.len());
    for (i, v) in vertices.iter().enumerate() {
        if index.insert(v.clone(), i).is_some() {
            return Err(RankError::DuplicateVertex(v.clone()));
        }
    }
    Ok(index)
}

fn add_edges(adjacency: &mut Adjacency, edges: &[Edge], options: &BuildOptions) -> Result<()> {
    let mut seen: HashSet<(&str, &str)> = HashSet::new();

    for edge in edges {
        let source = adjacency.index_of(&edge.from);
        let target = adjacency.index_of(&edge.to);

        if options.unknown_endpoints == EndpointPolicy::Reject
            && (source.is_none() || target.is_none())
        {
            return Err(RankError::MalformedEdge {
                from: edge.from.clone(),
                to: edge.to.clone(),
            });
        }

        let Some(source) = source else {
            warn!(from = %edge.from, to = %edge.to, "ignoring edge from unknown vertex");
            continue;
        };

        if options.parallel_edges == ParallelEdgePolicy::Collapse
            && !seen.insert((edge.from.as_str(), edge.to.as_str()))
        {
            continue;
        }

        let entry = match target {
            Some(t) => Target::Known(t),
            None => {
                warn!(from = %edge.from, to = %edge.to, "edge targets unknown vertex; its rank share is dropped");
                Target::Unknown(edge.to.clone())
            }
        };
        adjacency.push(source, entry);
    }

    Ok(())
}
