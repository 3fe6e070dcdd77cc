//! PageRank by damped power iteration over a vertex list and an edge list.
//!
//! [`graph::build`] turns raw input into an adjacency structure and uniform
//! starting ranks; [`rank::iterate`] runs a fixed number of passes over it.
//! [`rank::RankEngine`] wires the two together.

pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod graph;
pub mod rank;
pub mod reporting;
pub mod validation;

pub use error::{RankError, Result};
pub use graph::{Edge, GraphInput};
pub use rank::{RankEngine, RankMap, RankParams};
