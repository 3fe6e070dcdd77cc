// src/graph/mod.rs
//! Graph model: raw input and the adjacency built from it.

pub mod adjacency;
pub mod builder;
pub mod model;

pub use adjacency::{Adjacency, Links, Target};
pub use builder::{build, BuildOptions, EndpointPolicy, ParallelEdgePolicy};
pub use model::{Edge, GraphInput};
