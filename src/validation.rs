// src/validation.rs
//! Pre-flight checks over a submitted graph.
//!
//! The engine itself only refuses what it cannot rank. These checks also
//! surface structure that ranks fine but is probably a mistake in the input.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::graph::{BuildOptions, EndpointPolicy, GraphInput, ParallelEdgePolicy};
use crate::rank::{RankEngine, RankParams};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Severity {
    Info,
    Warning,
    /// The engine would reject or mis-rank this graph.
    Error,
}

impl Severity {
    /// Prefix word for the report line.
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warn",
            Self::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub severity: Severity,
    pub message: String,
}

impl Issue {
    fn new(severity: Severity, message: String) -> Self {
        Self { severity, message }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.count(Severity::Error) > 0
    }

    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }

    fn push(&mut self, severity: Severity, message: String) {
        self.issues.push(Issue::new(severity, message));
    }
}

/// Checks `graph` against the engine settings it is about to be ranked with.
///
/// Anything `engine.compute` would refuse is reported as an error.
#[must_use]
pub fn validate(graph: &GraphInput, engine: &RankEngine) -> ValidationReport {
    let mut report = ValidationReport::default();

    if graph.vertices.is_empty() {
        report.push(Severity::Error, "Graph must have at least one vertex".to_string());
    }
    check_identifiers(graph, &mut report);
    check_edges(graph, &engine.options, &mut report);
    check_params(&engine.params, &mut report);

    report
}

fn check_identifiers(graph: &GraphInput, report: &mut ValidationReport) {
    let mut seen = HashSet::new();
    for v in &graph.vertices {
        if v.trim().is_empty() {
            report.push(Severity::Error, "Vertex identifiers must not be blank".to_string());
        } else if !seen.insert(v.as_str()) {
            report.push(Severity::Error, format!("Duplicate vertex identifier '{v}'"));
        }
    }
}

fn check_edges(graph: &GraphInput, options: &BuildOptions, report: &mut ValidationReport) {
    let unknown_severity = match options.unknown_endpoints {
        EndpointPolicy::Permit => Severity::Warning,
        EndpointPolicy::Reject => Severity::Error,
    };
    let known: HashSet<&str> = graph.vertices.iter().map(String::as_str).collect();
    let mut with_out_edges: HashSet<&str> = HashSet::new();
    let mut multiplicity: HashMap<(&str, &str), usize> = HashMap::new();

    for edge in &graph.edges {
        if !known.contains(edge.from.as_str()) {
            let message = match options.unknown_endpoints {
                EndpointPolicy::Permit => format!("Edge {} -> {} starts at an unknown vertex and is ignored", edge.from, edge.to),
                EndpointPolicy::Reject => format!("Edge {} -> {} starts at an unknown vertex", edge.from, edge.to),
            };
            report.push(unknown_severity, message);
            continue;
        }
        with_out_edges.insert(edge.from.as_str());

        if !known.contains(edge.to.as_str()) {
            let message = match options.unknown_endpoints {
                EndpointPolicy::Permit => format!("Edge {} -> {} targets an unknown vertex; rank sent along it is lost", edge.from, edge.to),
                EndpointPolicy::Reject => format!("Edge {} -> {} targets an unknown vertex", edge.from, edge.to),
            };
            report.push(unknown_severity, message);
        }
        if edge.is_self_loop() {
            report.push(Severity::Info, format!("Self-loop on '{}'", edge.from));
        }
        *multiplicity.entry((edge.from.as_str(), edge.to.as_str())).or_default() += 1;
    }

    let mut parallel: Vec<_> = multiplicity.into_iter().filter(|(_, n)| *n > 1).collect();
    parallel.sort_unstable();
    for ((from, to), n) in parallel {
        let message = match options.parallel_edges {
            ParallelEdgePolicy::Keep => {
                format!("Edge {from} -> {to} appears {n} times and carries {n}x weight")
            }
            ParallelEdgePolicy::Collapse => {
                format!("Edge {from} -> {to} appears {n} times and is counted once")
            }
        };
        report.push(Severity::Info, message);
    }

    let mut reported = HashSet::new();
    for v in graph.vertices.iter().map(String::as_str) {
        if !with_out_edges.contains(v) && reported.insert(v) {
            report.push(
                Severity::Info,
                format!("'{v}' has no out-edges; its rank is spread over all vertices"),
            );
        }
    }
}

fn check_params(params: &RankParams, report: &mut ValidationReport) {
    if !(0.0..=1.0).contains(&params.damping_factor) {
        report.push(
            Severity::Warning,
            format!("Damping factor {} is outside [0, 1]", params.damping_factor),
        );
    }
    if params.max_iterations == 0 {
        report.push(
            Severity::Info,
            "Zero iterations: the uniform starting ranks are returned unchanged".to_string(),
        );
    }
}
