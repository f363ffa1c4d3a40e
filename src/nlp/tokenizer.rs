//! Whitespace tokenization
//!
//! Tokens are lower-cased, whitespace-separated runs. Punctuation stays
//! attached to its word, so `"world."` and `"world"` are different tokens.

/// Tokenize text for lexical-overlap comparison
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// Count whitespace-separated words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
