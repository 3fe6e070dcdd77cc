//! Console and JSON output for rank results and validation findings.

use crate::rank::RankReport;
use crate::validation::{Severity, ValidationReport};
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::fmt::Write;

/// Prints the ranked table and summary to stdout.
pub fn print_ranks(report: &RankReport<'_>, precision: usize) {
    print!("{}", render_ranks(report, precision));
}

/// Formats ranks as a table, highest first, with each vertex's share of the
/// total mass.
#[must_use]
pub fn render_ranks(report: &RankReport<'_>, precision: usize) -> String {
    let ranked = report.ranks.ranked();
    let width = ranked
        .iter()
        .map(|(id, _)| id.chars().count())
        .max()
        .unwrap_or(0)
        .max("vertex".len());
    let rank_width = (precision + 2).max("rank".len());

    let mut out = String::new();
    let header = format!("  #  {:<width$}  {:<rank_width$}  share", "vertex", "rank");
    let _ = writeln!(out, "{}", header.bold());
    for (pos, (id, rank)) in ranked.iter().enumerate() {
        let share = share_percent(*rank, report.total_mass);
        let _ = writeln!(
            out,
            "{:>3}  {id:<width$}  {rank:<rank_width$.precision$}  {share:>6.2}%",
            pos + 1
        );
    }
    let _ = writeln!(out);
    if let Some(stats) = stats_line(report, precision) {
        let _ = writeln!(out, "{stats}");
    }
    let _ = writeln!(out, "{}", summary_line(report, precision));
    out
}

fn share_percent(rank: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        rank / total * 100.0
    }
}

fn stats_line(report: &RankReport<'_>, precision: usize) -> Option<String> {
    let (top, top_rank) = report.ranks.ranked().first().copied()?;
    let mean = report.ranks.mean()?;
    let (lo, hi) = report.ranks.min_max()?;
    Some(format!(
        "top {} ({top_rank:.precision$}), mean {mean:.precision$}, range {lo:.precision$}..{hi:.precision$}",
        top.bold()
    ))
}

fn summary_line(report: &RankReport<'_>, precision: usize) -> String {
    let vertices = report.vertices.len();
    let edges = report.edges.len();
    let iterations = report.max_iterations;
    let body = format!(
        "{vertices} {}, {edges} {}, {iterations} {} at d={} (total mass {:.precision$})",
        pluralize_vertex(vertices),
        pluralize("edge", edges),
        pluralize("iteration", iterations),
        report.damping_factor,
        report.total_mass,
    );
    if (report.total_mass - 1.0).abs() > 1e-6 {
        format!("{} {}", "⚠".yellow(), body.yellow())
    } else {
        format!("{} {}", "✓".green(), body)
    }
}

/// Pretty-prints any serializable value as JSON on stdout.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Prints validation findings, most severe first, then a summary.
pub fn print_validation(report: &ValidationReport) {
    print!("{}", render_validation(report));
}

#[must_use]
pub fn render_validation(report: &ValidationReport) -> String {
    let mut issues: Vec<_> = report.issues.iter().collect();
    issues.sort_by(|a, b| b.severity.cmp(&a.severity));

    let mut out = String::new();
    for issue in issues {
        let line = format!("{}: {}", issue.severity.prefix(), issue.message);
        let _ = match issue.severity {
            Severity::Error => writeln!(out, "{}", line.red().bold()),
            Severity::Warning => writeln!(out, "{}", line.yellow()),
            Severity::Info => writeln!(out, "{}", line.dimmed()),
        };
    }

    let errors = report.count(Severity::Error);
    let warnings = report.count(Severity::Warning);
    let summary = format!(
        "{errors} {}, {warnings} {}",
        pluralize("error", errors),
        pluralize("warning", warnings)
    );
    let _ = if errors > 0 {
        writeln!(out, "{} {}", "✗".red(), summary.red())
    } else {
        writeln!(out, "{} {}", "✓".green(), summary)
    };
    out
}

fn pluralize(word: &str, n: usize) -> String {
    if n == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

fn pluralize_vertex(n: usize) -> &'static str {
    if n == 1 {
        "vertex"
    } else {
        "vertices"
    }
}
