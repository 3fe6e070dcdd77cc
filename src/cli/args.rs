use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::OutputFormat;

#[derive(Parser)]
#[command(name = "pagerank", version, about = "PageRank over vertex and edge lists")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute ranks for a graph file
    Rank(RankArgs),
    /// Validate a graph file without ranking it
    Check {
        /// Graph JSON file, or `-` for stdin
        #[arg(value_name = "GRAPH")]
        graph: PathBuf,
        /// Config file (defaults to ./pagerank.toml when present)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
        /// Print findings as JSON
        #[arg(long)]
        json: bool,
        /// Treat edges with unknown endpoints as errors, as `rank --strict` does
        #[arg(long)]
        strict: bool,
    },
}

/// Arguments for the Rank command
#[derive(Debug, Clone, Args)]
pub struct RankArgs {
    /// Graph JSON file, or `-` for stdin
    #[arg(value_name = "GRAPH")]
    pub graph: PathBuf,
    /// Probability of following a link (not range-checked)
    #[arg(long, short, allow_negative_numbers = true)]
    pub damping_factor: Option<f64>,
    /// Number of power-iteration passes
    #[arg(long, short)]
    pub max_iterations: Option<usize>,
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    /// Reject edges with unknown endpoints instead of ignoring them
    #[arg(long)]
    pub strict: bool,
    /// Count repeated edges once
    #[arg(long)]
    pub collapse_parallel: bool,
    /// Config file (defaults to ./pagerank.toml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
