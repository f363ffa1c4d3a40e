//! Fixed-iteration TextRank power iteration
//!
//! Runs a set number of rounds with no convergence check, so the same graph
//! always yields the same scores. Every node has out-degree `n - 1`: the
//! sentence graph is complete, and zero-weight edges still count toward the
//! degree.
//!
//! ```text
//! new[i] = (1 - d) + d * Σ_{j≠i} w(i, j) * score[j] / (n - 1)
//! ```

use super::RankResult;
use crate::graph::dense::SimilarityGraph;

/// Default number of rounds
pub const DEFAULT_ITERATIONS: usize = 30;

/// Default damping factor
pub const DEFAULT_DAMPING: f64 = 0.85;

/// Fixed-iteration ranker
#[derive(Debug, Clone)]
pub struct FixedIterationRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Number of rounds to run
    pub iterations: usize,
}

impl Default for FixedIterationRank {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

impl FixedIterationRank {
    /// Create a new ranker with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the number of rounds
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Rank the nodes of `graph`
    pub fn run(&self, graph: &SimilarityGraph) -> RankResult {
        self.run_with(graph, |_, _| {})
    }

    /// Rank the nodes of `graph`, calling `on_round` with the 1-based round
    /// number and the scores after each round
    pub fn run_with<F>(&self, graph: &SimilarityGraph, mut on_round: F) -> RankResult
    where
        F: FnMut(usize, &[f64]),
    {
        let n = graph.num_nodes;
        if n == 0 {
            return RankResult::new(vec![], 0);
        }

        let mut scores = vec![1.0; n];
        let mut new_scores = vec![0.0; n];
        let teleport = 1.0 - self.damping;

        for round in 1..=self.iterations {
            for (i, slot) in new_scores.iter_mut().enumerate() {
                let mut sum = 0.0;
                for (j, weight) in graph.neighbors(i) {
                    sum += weight * scores[j] / graph.degree(j) as f64;
                }
                *slot = teleport + self.damping * sum;
            }

            // Swap buffers; the next round reads only this round's scores
            std::mem::swap(&mut scores, &mut new_scores);
            on_round(round, &scores);
        }

        RankResult::new(scores, self.iterations)
    }
}
