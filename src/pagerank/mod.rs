//! PageRank-style sentence ranking
//!
//! This module provides the fixed-iteration ranker used for TextRank
//! summarization.

pub mod fixed;

pub use fixed::{FixedIterationRank, DEFAULT_DAMPING, DEFAULT_ITERATIONS};

/// Result of a ranking run
#[derive(Debug, Clone, PartialEq)]
pub struct RankResult {
    /// Scores for each node (indexed by sentence index)
    pub scores: Vec<f64>,
    /// Number of rounds performed
    pub iterations: usize,
}

impl RankResult {
    /// Create a new rank result
    pub fn new(scores: Vec<f64>, iterations: usize) -> Self {
        Self { scores, iterations }
    }

    /// Get the top N nodes by score
    ///
    /// Equal scores are ordered by ascending node index, so the selection is
    /// the same on every run.
    pub fn top_n(&self, n: usize) -> Vec<(usize, f64)> {
        let mut indexed: Vec<_> = self.scores.iter().copied().enumerate().collect();
        indexed.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        indexed.truncate(n);
        indexed
    }

    /// Get the score for a specific node
    pub fn score(&self, node: usize) -> f64 {
        self.scores.get(node).copied().unwrap_or(0.0)
    }

    /// Number of scored nodes
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Check if no nodes were scored
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
