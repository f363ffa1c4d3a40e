//! Similarity graph builder
//!
//! Connects every pair of sentences with a lexical-overlap weight:
//!
//! ```text
//! weight(i, j) = common(i, j) / (ln |tokens_i| + ln |tokens_j|)
//! ```
//!
//! where `common(i, j)` counts the tokens of sentence `i` that appear
//! anywhere in sentence `j`, once per occurrence in `i`. A sentence that
//! repeats a shared token therefore weighs its own edge more than the
//! reverse edge. [`OverlapMode::Symmetric`] averages the two directions
//! instead. Sentence token lists and membership sets are computed once per
//! sentence, not once per pair.

use crate::graph::dense::SimilarityGraph;
use crate::nlp::tokenizer::tokenize;
use crate::types::Sentence;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// How the overlap numerator is combined for a sentence pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapMode {
    /// Raw `common(i, j)`; a sentence that repeats a shared token pulls
    /// harder in its own direction.
    #[default]
    Directed,
    /// Mean of `common(i, j)` and `common(j, i)`; weights are symmetric.
    Symmetric,
}

impl OverlapMode {
    /// Returns the user-facing name used in JSON and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Directed => "directed",
            Self::Symmetric => "symmetric",
        }
    }
}

/// Tokens of one sentence plus a set for membership tests
#[derive(Debug)]
struct SentenceTokens {
    tokens: Vec<String>,
    members: FxHashSet<String>,
    log_len: f64,
}

impl SentenceTokens {
    fn new(text: &str) -> Self {
        let tokens = tokenize(text);
        let members = tokens.iter().cloned().collect();
        let log_len = if tokens.is_empty() {
            0.0
        } else {
            (tokens.len() as f64).ln()
        };
        Self {
            tokens,
            members,
            log_len,
        }
    }

    /// Number of this sentence's tokens (with repeats) present in `other`
    fn common_count(&self, other: &SentenceTokens) -> usize {
        self.tokens
            .iter()
            .filter(|t| other.members.contains(t.as_str()))
            .count()
    }
}

/// Divide an overlap count by the log-length normalizer.
///
/// A zero denominator (both sentences are a single token) gives weight 0
/// rather than an infinite or undefined value.
fn normalize(common: f64, a: &SentenceTokens, b: &SentenceTokens) -> f64 {
    if a.tokens.is_empty() || b.tokens.is_empty() {
        return 0.0;
    }
    let denominator = a.log_len + b.log_len;
    if denominator <= 0.0 {
        return 0.0;
    }
    let weight = common / denominator;
    if weight.is_finite() {
        weight
    } else {
        0.0
    }
}

/// Builds a [`SimilarityGraph`] from split sentences
#[derive(Debug, Clone, Default)]
pub struct SimilarityGraphBuilder {
    overlap: OverlapMode,
}

impl SimilarityGraphBuilder {
    /// Create a builder using directed overlap
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the overlap mode
    pub fn with_overlap(mut self, overlap: OverlapMode) -> Self {
        self.overlap = overlap;
        self
    }

    /// The configured overlap mode
    pub fn overlap(&self) -> OverlapMode {
        self.overlap
    }

    /// Build the complete similarity graph over `sentences`
    pub fn build(&self, sentences: &[Sentence]) -> SimilarityGraph {
        let texts: Vec<&str> = sentences.iter().map(|s| s.text.as_str()).collect();
        self.build_from_texts(&texts)
    }

    /// Build the graph from raw sentence strings
    pub fn build_from_texts(&self, texts: &[&str]) -> SimilarityGraph {
        let n = texts.len();
        let mut graph = SimilarityGraph::new(n);
        if n < 2 {
            return graph;
        }

        let tokenized: Vec<SentenceTokens> = texts.iter().map(|t| SentenceTokens::new(t)).collect();

        for i in 0..n {
            for j in (i + 1)..n {
                let (a, b) = (&tokenized[i], &tokenized[j]);
                let forward = a.common_count(b) as f64;
                let backward = b.common_count(a) as f64;

                match self.overlap {
                    OverlapMode::Symmetric => {
                        let weight = normalize((forward + backward) / 2.0, a, b);
                        graph.set_undirected(i, j, weight);
                    }
                    OverlapMode::Directed => {
                        graph.set_weight(i, j, normalize(forward, a, b));
                        graph.set_weight(j, i, normalize(backward, b, a));
                    }
                }
            }
        }

        graph
    }
}

/// Similarity of two sentences as the graph builder would weight them
pub fn lexical_similarity(a: &str, b: &str, overlap: OverlapMode) -> f64 {
    SimilarityGraphBuilder::new()
        .with_overlap(overlap)
        .build_from_texts(&[a, b])
        .weight(0, 1)
}
