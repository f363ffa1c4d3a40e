use proptest::prelude::*;
use textrank_summarizer::nlp::splitter::split_sentences;
use textrank_summarizer::nlp::tokenizer::word_count;
use textrank_summarizer::{
    summarize, OverlapMode, SimilarityGraphBuilder, Summarizer, SummarizerConfig,
};

const VOCAB: &[&str] = &[
    "river", "stone", "light", "market", "engine", "garden", "signal", "winter", "paper",
    "harbor", "the", "a", "of", "and", "bright", "slow",
];

/// A sentence of 3..12 words drawn from a small vocabulary
fn sentence() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(prop::sample::select(VOCAB), 3..12),
        prop::sample::select(&[".", "!", "?", "..."][..]),
    )
        .prop_map(|(words, end)| format!("{}{}", words.join(" "), end))
}

/// A document of `range` sentences
fn document(range: std::ops::Range<usize>) -> impl Strategy<Value = String> {
    prop::collection::vec(sentence(), range).prop_map(|s| s.join(" "))
}

proptest! {
    #[test]
    fn short_inputs_returned_unchanged(s in "[a-zA-Z .!?,]{0,300}") {
        prop_assume!(word_count(&s) < 100);
        prop_assert_eq!(summarize(&s, 3, 10_000), s);
    }

    #[test]
    fn result_has_min_k_n_sentences(doc in document(15..60), k in 0usize..12) {
        prop_assume!(word_count(&doc) >= 100);
        let n = split_sentences(&doc).len();

        let summary = Summarizer::with_config(SummarizerConfig::default().with_target_sentences(k))
            .unwrap()
            .summarize_detailed(&doc);

        prop_assert_eq!(summary.len(), k.min(n));
    }

    #[test]
    fn result_preserves_reading_order(doc in document(15..60), k in 1usize..8) {
        prop_assume!(word_count(&doc) >= 100);

        let summary = Summarizer::with_config(SummarizerConfig::default().with_target_sentences(k))
            .unwrap()
            .summarize_detailed(&doc);

        for pair in summary.sentences.windows(2) {
            prop_assert!(pair[0].sentence.index < pair[1].sentence.index);
            prop_assert!(pair[0].sentence.end <= pair[1].sentence.start);
        }
    }

    #[test]
    fn summarize_is_deterministic(doc in document(5..40), k in 1usize..6) {
        prop_assert_eq!(summarize(&doc, k, 10_000), summarize(&doc, k, 10_000));
    }

    #[test]
    fn symmetric_weights_are_symmetric_and_finite(doc in document(2..20)) {
        let sentences = split_sentences(&doc);
        let graph = SimilarityGraphBuilder::new()
            .with_overlap(OverlapMode::Symmetric)
            .build(&sentences);

        prop_assert!(graph.is_symmetric());
        for i in 0..graph.num_nodes {
            for (_, w) in graph.neighbors(i) {
                prop_assert!(w.is_finite() && w >= 0.0);
            }
        }
    }

    #[test]
    fn scores_always_finite(doc in document(15..50)) {
        prop_assume!(word_count(&doc) >= 100);
        let summary = Summarizer::new().summarize_detailed(&doc);

        for s in &summary.sentences {
            prop_assert!(s.score.is_finite());
        }
    }

    #[test]
    fn truncated_output_respects_limit(doc in document(5..40), limit in 1usize..400) {
        let config = SummarizerConfig::default().with_max_input_length(limit);
        let summary = Summarizer::with_config(config).unwrap().summarize_detailed(&doc);

        if !summary.truncated {
            prop_assert!(doc.chars().count() <= limit);
        } else if summary.passthrough {
            // Kept prefix plus the "..." marker
            prop_assert!(summary.text.chars().count() <= limit + 3);
            prop_assert!(summary.text.ends_with("..."));
        }
    }
}
