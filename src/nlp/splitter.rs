//! Sentence splitting
//!
//! Splits text on Latin sentence terminators. A sentence is a maximal run of
//! non-terminator characters followed by one or more terminators; text after
//! the last terminator is not a sentence and is dropped.

use crate::types::Sentence;

/// Characters that end a sentence
pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

#[inline]
fn is_terminator(ch: char) -> bool {
    SENTENCE_TERMINATORS.contains(&ch)
}

/// Punctuation-based sentence splitter
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceSplitter;

impl SentenceSplitter {
    /// Create a new splitter
    pub fn new() -> Self {
        Self
    }

    /// Split text into sentences in reading order
    ///
    /// Terminator runs with no preceding text (e.g. a leading `"..."`) are
    /// skipped rather than emitted as empty sentences.
    pub fn split(&self, text: &str) -> Vec<Sentence> {
        let mut sentences = Vec::new();
        let mut body_start: Option<usize> = None;
        let mut chars = text.char_indices().peekable();

        while let Some((pos, ch)) = chars.next() {
            if !is_terminator(ch) {
                body_start.get_or_insert(pos);
                continue;
            }

            let Some(start) = body_start.take() else {
                continue;
            };

            // Swallow the whole terminator run ("?!", "...")
            let mut end = pos + ch.len_utf8();
            while let Some(&(next_pos, next)) = chars.peek() {
                if !is_terminator(next) {
                    break;
                }
                end = next_pos + next.len_utf8();
                chars.next();
            }

            let index = sentences.len();
            sentences.push(Sentence::new(&text[start..end], start, end, index));
        }

        sentences
    }
}

/// Split text into sentences with the default splitter
pub fn split_sentences(text: &str) -> Vec<Sentence> {
    SentenceSplitter.split(text)
}
