//! Core data types shared across the summarization pipeline.

use serde::{Deserialize, Serialize};

/// A sentence cut from the source text.
///
/// `start..end` are byte offsets into the text the sentence was split from;
/// `index` is its 0-based position in reading order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Sentence text, including its terminators
    pub text: String,
    /// Start byte offset
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
    /// Position in the split sequence
    pub index: usize,
}

impl Sentence {
    /// Create a new sentence
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
        }
    }
}

/// A sentence picked for the summary, with the score that got it picked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSentence {
    pub sentence: Sentence,
    pub score: f64,
}

/// Detailed output of a summarization call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// The summary string (what [`crate::summarize`] returns)
    pub text: String,
    /// Selected sentences in document order. Empty when ranking was skipped.
    pub sentences: Vec<ScoredSentence>,
    /// Number of sentences the input split into
    pub sentence_count: usize,
    /// Whitespace word count of the (possibly truncated) input
    pub word_count: usize,
    /// Whether the input was cut at `max_input_length`
    pub truncated: bool,
    /// Whether the input was returned as-is because it was too short to rank
    pub passthrough: bool,
}

impl Summary {
    /// Number of sentences in the summary
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Returns `true` if the summary selected no sentences
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}
