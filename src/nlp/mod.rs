//! Natural Language Processing components
//!
//! This module provides sentence splitting and whitespace tokenization.

pub mod splitter;
pub mod tokenizer;
