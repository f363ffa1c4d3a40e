//! Summarizer configuration.
//!
//! All fields have defaults that reproduce the standard TextRank setup
//! (3 sentences, 10000-character input cap, 100-word threshold, 30 rounds,
//! damping 0.85), so a config can be loaded from a partial JSON object:
//!
//! ```json
//! { "target_sentences": 5, "overlap": "symmetric" }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::graph::builder::OverlapMode;
use crate::pagerank::fixed::{DEFAULT_DAMPING, DEFAULT_ITERATIONS};

/// Default number of sentences in a summary
pub const DEFAULT_TARGET_SENTENCES: usize = 3;

/// Default input cap, in characters
pub const DEFAULT_MAX_INPUT_LENGTH: usize = 10_000;

/// Inputs with fewer words than this are returned unchanged
pub const DEFAULT_MIN_WORDS: usize = 100;

/// Appended to input cut at `max_input_length`
pub const DEFAULT_ELLIPSIS: &str = "...";

/// Sentences kept when summarizing a page's main content
pub const PAGE_TARGET_SENTENCES: usize = 5;

/// Summarizer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SummarizerConfig {
    /// Number of sentences to keep
    pub target_sentences: usize,
    /// Input longer than this many characters is truncated
    pub max_input_length: usize,
    /// Word count below which ranking is skipped
    pub min_words: usize,
    /// Ranking rounds
    pub iterations: usize,
    /// Damping factor
    pub damping: f64,
    /// How pairwise overlap is combined
    pub overlap: OverlapMode,
    /// Marker appended after truncation
    pub ellipsis: String,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            target_sentences: DEFAULT_TARGET_SENTENCES,
            max_input_length: DEFAULT_MAX_INPUT_LENGTH,
            min_words: DEFAULT_MIN_WORDS,
            iterations: DEFAULT_ITERATIONS,
            damping: DEFAULT_DAMPING,
            overlap: OverlapMode::default(),
            ellipsis: DEFAULT_ELLIPSIS.to_string(),
        }
    }
}

impl SummarizerConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration for summarizing a page's main content
    pub fn page() -> Self {
        Self::default().with_target_sentences(PAGE_TARGET_SENTENCES)
    }

    /// Parse a configuration from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_target_sentences(mut self, n: usize) -> Self {
        self.target_sentences = n;
        self
    }

    pub fn with_max_input_length(mut self, len: usize) -> Self {
        self.max_input_length = len;
        self
    }

    pub fn with_min_words(mut self, min_words: usize) -> Self {
        self.min_words = min_words;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_overlap(mut self, overlap: OverlapMode) -> Self {
        self.overlap = overlap;
        self
    }

    pub fn with_ellipsis(mut self, ellipsis: impl Into<String>) -> Self {
        self.ellipsis = ellipsis.into();
        self
    }

    /// Collect every problem with this configuration.
    ///
    /// Does not stop at the first problem, so callers can report them all.
    pub fn problems(&self) -> Vec<ConfigError> {
        let mut problems = Vec::new();
        if !self.damping.is_finite() || !(0.0..=1.0).contains(&self.damping) {
            problems.push(ConfigError::InvalidDamping(self.damping));
        }
        if self.iterations == 0 {
            problems.push(ConfigError::ZeroIterations);
        }
        if self.max_input_length == 0 {
            problems.push(ConfigError::ZeroInputLength);
        }
        problems
    }

    /// Check the configuration, returning the first problem found
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.problems().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
