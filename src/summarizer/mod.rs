//! Summarization components
//!
//! Provides input truncation and top-k sentence selection for extractive
//! TextRank summaries. The stages are wired together by
//! [`crate::pipeline::runner::Summarizer`].

pub mod selector;
pub mod truncate;

pub use selector::{join_sentences, SentenceSelector};
pub use truncate::truncate_input;
