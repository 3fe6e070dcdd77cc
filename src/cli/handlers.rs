// src/cli/handlers.rs
//! Command handlers for ranking and checking graph files.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::args::RankArgs;
use crate::config::{Config, OutputFormat};
use crate::exit::RankExit;
use crate::graph::{EndpointPolicy, GraphInput, ParallelEdgePolicy};
use crate::rank::RankEngine;
use crate::reporting;
use crate::validation;

/// Reads a graph file, or stdin when `path` is `-`.
///
/// # Errors
/// Returns error if the source cannot be read or is not graph JSON.
pub fn read_graph(path: &Path) -> Result<GraphInput> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read graph from stdin")?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?
    };

    GraphInput::from_json(&content)
        .with_context(|| format!("Invalid graph JSON in {}", path.display()))
}

/// Loads the explicit config file, or `./pagerank.toml` when present.
///
/// # Errors
/// Returns error if the config cannot be read or parsed.
pub fn resolve_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => Config::load_file(path),
        None => Config::load_from(Path::new(".")),
    }
}

/// Layers command-line overrides on top of the loaded config.
pub fn apply_overrides(config: &mut Config, args: &RankArgs) {
    if let Some(d) = args.damping_factor {
        config.engine.damping_factor = d;
    }
    if let Some(n) = args.max_iterations {
        config.engine.max_iterations = n;
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }
    if args.strict {
        config.engine.unknown_endpoints = EndpointPolicy::Reject;
    }
    if args.collapse_parallel {
        config.engine.parallel_edges = ParallelEdgePolicy::Collapse;
    }
}

/// Handles `pagerank rank`.
///
/// # Errors
/// Returns error if input cannot be loaded or the engine rejects the graph.
pub fn handle_rank(args: &RankArgs) -> Result<RankExit> {
    let mut config = resolve_config(args.config.as_deref())?;
    apply_overrides(&mut config, args);

    let graph = read_graph(&args.graph)?;
    let engine = RankEngine::from_config(&config);
    let report = engine
        .report(&graph)
        .with_context(|| format!("Cannot rank {}", args.graph.display()))?;

    info!(vertices = report.vertices.len(), total = report.total_mass, "ranked graph");

    match config.output.format {
        OutputFormat::Json => reporting::print_json(&report)?,
        OutputFormat::Text => reporting::print_ranks(&report, config.output.precision),
    }
    Ok(RankExit::Success)
}

/// Handles `pagerank check`.
///
/// # Errors
/// Returns error if input cannot be loaded.
pub fn handle_check(
    graph_path: &Path,
    config_path: Option<&Path>,
    json: bool,
    strict: bool,
) -> Result<RankExit> {
    let mut config = resolve_config(config_path)?;
    if strict {
        config.engine.unknown_endpoints = EndpointPolicy::Reject;
    }
    let graph = read_graph(graph_path)?;
    let report = validation::validate(&graph, &RankEngine::from_config(&config));

    if json {
        reporting::print_json(&report)?;
    } else {
        reporting::print_validation(&report);
    }

    if report.has_errors() {
        Ok(RankExit::CheckFailed)
    } else {
        Ok(RankExit::Success)
    }
}
