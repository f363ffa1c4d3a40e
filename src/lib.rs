//! Extractive text summarization with TextRank.
//!
//! Text is split into sentences, every pair of sentences is weighted by
//! lexical overlap, and a fixed number of PageRank-style rounds scores each
//! sentence. The best-scored sentences are returned in reading order.
//!
//! ```
//! use textrank_summarizer::summarize;
//!
//! // Short inputs (under 100 words) come back unchanged
//! assert_eq!(summarize("Hello world.", 3, 10_000), "Hello world.");
//! ```
//!
//! For more control use [`Summarizer`] with a [`SummarizerConfig`].

pub mod bridge;
pub mod config;
pub mod errors;
pub mod graph;
pub mod nlp;
pub mod page;
pub mod pagerank;
pub mod pipeline;
pub mod summarizer;
pub mod types;

pub use config::SummarizerConfig;
pub use errors::{BridgeError, ConfigError, ErrorCode};
pub use graph::{OverlapMode, SimilarityGraph, SimilarityGraphBuilder};
pub use page::{PageContent, PageRegions};
pub use pagerank::{FixedIterationRank, RankResult};
pub use pipeline::{PipelineObserver, Summarizer};
pub use types::{ScoredSentence, Sentence, Summary};

/// Summarize `text` into at most `target_sentences` sentences.
///
/// Input longer than `max_input_length` characters is truncated first.
/// Inputs under 100 words are returned (truncated) as-is.
pub fn summarize(text: &str, target_sentences: usize, max_input_length: usize) -> String {
    let config = SummarizerConfig::default()
        .with_target_sentences(target_sentences)
        .with_max_input_length(max_input_length);
    summarize_with(text, &config)
}

/// Summarize `text` with an explicit configuration.
///
/// The configuration is used as given; call
/// [`SummarizerConfig::validate`] first to reject out-of-range values.
pub fn summarize_with(text: &str, config: &SummarizerConfig) -> String {
    Summarizer::with_config_unchecked(config.clone()).summarize(text)
}
