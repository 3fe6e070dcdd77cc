// src/rank/pagerank.rs
//! Fixed-count damped power iteration with dangling-node redistribution.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::RankMap;
use crate::error::{RankError, Result};
use crate::graph::{Adjacency, Links, Target};

pub const DEFAULT_DAMPING: f64 = 0.85;
pub const DEFAULT_ITERATIONS: usize = 100;

/// Iteration parameters. The damping factor is not range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankParams {
    pub damping_factor: f64,
    pub max_iterations: usize,
}

impl Default for RankParams {
    fn default() -> Self {
        Self {
            damping_factor: DEFAULT_DAMPING,
            max_iterations: DEFAULT_ITERATIONS,
        }
    }
}

/// Runs exactly `max_iterations` passes starting from `initial`.
///
/// No renormalization is applied to the result.
///
/// # Errors
/// `InvalidGraph` for an empty adjacency, `ShapeMismatch` when `initial`
/// is not keyed by the adjacency's vertices.
pub fn iterate(adjacency: &Adjacency, initial: RankMap, params: &RankParams) -> Result<RankMap> {
    if adjacency.is_empty() {
        return Err(RankError::InvalidGraph);
    }
    if initial.vertices() != adjacency.vertices() {
        return Err(RankError::ShapeMismatch {
            vertices: adjacency.len(),
            ranks: initial.len(),
        });
    }

    let (vertices, mut ranks) = initial.into_parts();
    for _ in 0..params.max_iterations {
        ranks = propagate(adjacency, &ranks, params.damping_factor);
    }

    let result = RankMap::from_parts(vertices, ranks);
    debug!(
        iterations = params.max_iterations,
        damping = params.damping_factor,
        total = result.total(),
        "rank iteration finished"
    );
    Ok(result)
}

/// One synchronous pass. Reads only `ranks`, writes only the returned vector.
#[allow(clippy::cast_precision_loss)]
fn propagate(adjacency: &Adjacency, ranks: &[f64], damping: f64) -> Vec<f64> {
    let n = ranks.len() as f64;
    let mut next = vec![(1.0 - damping) / n; ranks.len()];

    for (v, &rank) in ranks.iter().enumerate() {
        match adjacency.links(v) {
            Links::Outgoing(targets) => follow_links(&mut next, targets, rank, damping),
            Links::Dangling => spread_dangling(&mut next, rank, damping),
        }
    }

    next
}

#[allow(clippy::cast_precision_loss)]
fn follow_links(next: &mut [f64], targets: &[Target], rank: f64, damping: f64) {
    let share = rank / targets.len() as f64;
    for target in targets {
        // Unknown targets keep their slot in the degree but receive nothing.
        let Target::Known(i) = target else {
            continue;
        };
        if let Some(slot) = next.get_mut(*i) {
            *slot += damping * share;
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn spread_dangling(next: &mut [f64], rank: f64, damping: f64) {
    let share = rank / next.len() as f64;
    for slot in next.iter_mut() {
        *slot += damping * share;
    }
}
