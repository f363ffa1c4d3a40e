//! Top-k sentence selection for summarization
//!
//! Picks the highest-ranked sentences and returns them in reading order.

use crate::pagerank::RankResult;
use crate::types::{ScoredSentence, Sentence};

/// Selects the `num_sentences` best-scored sentences
#[derive(Debug, Clone)]
pub struct SentenceSelector {
    num_sentences: usize,
}

impl Default for SentenceSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceSelector {
    /// Create a new selector that keeps 3 sentences
    pub fn new() -> Self {
        Self { num_sentences: 3 }
    }

    /// Set number of sentences to select
    pub fn with_num_sentences(mut self, n: usize) -> Self {
        self.num_sentences = n;
        self
    }

    /// Select sentences by rank
    ///
    /// Keeps `min(num_sentences, sentences.len())` sentences. Equal scores go
    /// to the earlier sentence. The result is sorted by document order.
    pub fn select(&self, sentences: &[Sentence], ranks: &RankResult) -> Vec<ScoredSentence> {
        let k = self.num_sentences.min(sentences.len());

        let mut selected: Vec<ScoredSentence> = ranks
            .top_n(k)
            .into_iter()
            .filter_map(|(i, score)| {
                sentences.get(i).map(|sentence| ScoredSentence {
                    sentence: sentence.clone(),
                    score,
                })
            })
            .collect();

        selected.sort_by_key(|s| s.sentence.index);
        selected
    }
}

/// Join selected sentences with single spaces
pub fn join_sentences(selected: &[ScoredSentence]) -> String {
    selected
        .iter()
        .map(|s| s.sentence.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_sentences(texts: &[&str]) -> Vec<Sentence> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Sentence::new(*t, 0, t.len(), i))
            .collect()
    }

    #[test]
    fn test_selects_highest_scores() {
        let sentences = make_sentences(&["A.", "B.", "C.", "D."]);
        let ranks = RankResult::new(vec![0.1, 0.9, 0.2, 0.8], 30);

        let selected = SentenceSelector::new().with_num_sentences(2).select(&sentences, &ranks);
        let indices: Vec<_> = selected.iter().map(|s| s.sentence.index).collect();

        assert_eq!(indices, vec![1, 3]);
        assert_eq!(selected[0].score, 0.9);
    }

    #[test]
    fn test_document_order() {
        let sentences = make_sentences(&["A.", "B.", "C.", "D."]);
        let ranks = RankResult::new(vec![0.4, 0.1, 0.3, 0.9], 30);

        let selected = SentenceSelector::new().select(&sentences, &ranks);

        for i in 1..selected.len() {
            assert!(selected[i].sentence.index > selected[i - 1].sentence.index);
        }
        assert_eq!(join_sentences(&selected), "A. C. D.");
    }

    #[test]
    fn test_ties_prefer_earlier_sentence() {
        let sentences = make_sentences(&["A.", "B.", "C.", "D."]);
        let ranks = RankResult::new(vec![0.5; 4], 30);

        let selected = SentenceSelector::new().with_num_sentences(2).select(&sentences, &ranks);

        assert_eq!(join_sentences(&selected), "A. B.");
    }

    #[test]
    fn test_k_capped_at_sentence_count() {
        let sentences = make_sentences(&["A.", "B.", "C."]);
        let ranks = RankResult::new(vec![0.3, 0.2, 0.1], 30);

        let selected = SentenceSelector::new().with_num_sentences(10).select(&sentences, &ranks);

        assert_eq!(selected.len(), 3);
    }

    #[test]
    fn test_zero_sentences_requested() {
        let sentences = make_sentences(&["A.", "B."]);
        let ranks = RankResult::new(vec![0.3, 0.2], 30);

        let selected = SentenceSelector::new().with_num_sentences(0).select(&sentences, &ranks);

        assert!(selected.is_empty());
        assert_eq!(join_sentences(&selected), "");
    }

    #[test]
    fn test_empty_input() {
        let selected = SentenceSelector::new().select(&[], &RankResult::new(vec![], 0));
        assert!(selected.is_empty());
    }
}
