// src/rank/ranks.rs
//! Vertex-ordered rank mapping.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Ranks keyed by vertex, reported in input vertex order.
#[derive(Debug, Clone, PartialEq)]
pub struct RankMap {
    vertices: Vec<String>,
    scores: Vec<f64>,
}

impl RankMap {
    /// `1/n` for every vertex.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn uniform(vertices: Vec<String>) -> Self {
        let n = vertices.len() as f64;
        let scores = vec![1.0 / n; vertices.len()];
        Self { vertices, scores }
    }

    pub(crate) fn from_parts(vertices: Vec<String>, scores: Vec<f64>) -> Self {
        Self { vertices, scores }
    }

    pub(crate) fn into_parts(self) -> (Vec<String>, Vec<f64>) {
        (self.vertices, self.scores)
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
    pub fn get(&self, id: &str) -> Option<f64> {
        let i = self.vertices.iter().position(|v| v == id)?;
        self.scores.get(i).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.vertices
            .iter()
            .map(String::as_str)
            .zip(self.scores.iter().copied())
    }

    /// Sum of all ranks. Ideally 1.0, minus any mass sent to unknown targets.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.scores.iter().sum()
    }

    /// Highest rank first; ties keep input order.
    #[must_use]
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut out: Vec<(&str, f64)> = self.iter().collect();
        out.sort_by(|a, b| b.1.total_cmp(&a.1));
        out
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        Some(self.total() / self.len() as f64)
    }

    #[must_use]
    pub fn min_max(&self) -> Option<(f64, f64)> {
        let first = *self.scores.first()?;
        Some(
            self.scores
                .iter()
                .fold((first, first), |(lo, hi), &s| (lo.min(s), hi.max(s))),
        )
    }
}

impl Serialize for RankMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (id, rank) in self.iter() {
            map.serialize_entry(id, &rank)?;
        }
        map.end()
    }
}
