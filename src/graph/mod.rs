//! Graph construction and representation
//!
//! This module builds the sentence-similarity graph that TextRank runs on.

pub mod builder;
pub mod dense;

pub use builder::{OverlapMode, SimilarityGraphBuilder};
pub use dense::SimilarityGraph;
