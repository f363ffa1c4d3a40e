//! Pipeline runner — orchestrates the summarization stages.
//!
//! [`Summarizer::summarize_observed`] runs the stages in order, threading
//! each stage's output into the next and notifying a [`PipelineObserver`] at
//! every boundary:
//!
//! 1. Truncate the input to `max_input_length` characters
//! 2. Split into sentences
//! 3. Build the similarity graph
//! 4. Rank (fixed rounds)
//! 5. Select the top sentences and join them in reading order
//!
//! Inputs below the word threshold are returned after stage 2 without
//! ranking, and inputs with no sentences give an empty summary. A
//! `Summarizer` holds only its configuration, so one instance can serve any
//! number of threads.

use std::borrow::Cow;

use crate::config::SummarizerConfig;
use crate::errors::ConfigError;
use crate::graph::builder::SimilarityGraphBuilder;
use crate::nlp::splitter::SentenceSplitter;
use crate::nlp::tokenizer::word_count;
use crate::pagerank::fixed::FixedIterationRank;
use crate::pipeline::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, StageReportBuilder, STAGE_GRAPH,
    STAGE_RANK, STAGE_SELECT, STAGE_SPLIT, STAGE_TRUNCATE,
};
use crate::summarizer::selector::{join_sentences, SentenceSelector};
use crate::summarizer::truncate::truncate_input;
use crate::types::Summary;

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("summarizer_stage", stage = $name).entered();
    };
}

/// Extractive TextRank summarizer
#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    config: SummarizerConfig,
}

impl Summarizer {
    /// Create a summarizer with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a summarizer from a validated configuration
    pub fn with_config(config: SummarizerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a summarizer without validating the configuration.
    ///
    /// Out-of-range values still produce a summary; they just may not be a
    /// meaningful one (e.g. damping above 1).
    pub fn with_config_unchecked(config: SummarizerConfig) -> Self {
        Self { config }
    }

    /// Summarizer for page main content (5 sentences)
    pub fn page() -> Self {
        Self {
            config: SummarizerConfig::page(),
        }
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Summarize `text` into a string
    pub fn summarize(&self, text: &str) -> String {
        self.summarize_detailed(text).text
    }

    /// Summarize `text`, keeping the selected sentences and their scores
    pub fn summarize_detailed(&self, text: &str) -> Summary {
        self.summarize_observed(text, &mut NoopObserver)
    }

    /// Summarize `text`, reporting each stage to `observer`
    pub fn summarize_observed(
        &self,
        text: &str,
        observer: &mut impl PipelineObserver,
    ) -> Summary {
        let cfg = &self.config;

        // Stage 1: Truncate
        let input = {
            trace_stage!(STAGE_TRUNCATE);
            observer.on_stage_start(STAGE_TRUNCATE);
            let clock = StageClock::start();
            let input = truncate_input(text, cfg.max_input_length, &cfg.ellipsis);
            observer.on_stage_end(STAGE_TRUNCATE, &StageReport::new(clock.elapsed()));
            input
        };
        let truncated = matches!(input, Cow::Owned(_));

        // Stage 2: Split
        let sentences = {
            trace_stage!(STAGE_SPLIT);
            observer.on_stage_start(STAGE_SPLIT);
            let clock = StageClock::start();
            let sentences = SentenceSplitter::new().split(&input);
            observer.on_stage_end(STAGE_SPLIT, &StageReport::new(clock.elapsed()));
            observer.on_sentences(&sentences);
            sentences
        };

        let words = word_count(&input);
        let sentence_count = sentences.len();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            chars = text.len(),
            truncated,
            words,
            sentences = sentence_count,
            "input prepared"
        );

        if words < cfg.min_words {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                words,
                min_words = cfg.min_words,
                "below word threshold, passing input through"
            );

            return Summary {
                text: input.into_owned(),
                sentences: Vec::new(),
                sentence_count,
                word_count: words,
                truncated,
                passthrough: true,
            };
        }

        if sentences.is_empty() {
            return Summary {
                text: String::new(),
                sentences: Vec::new(),
                sentence_count: 0,
                word_count: words,
                truncated,
                passthrough: false,
            };
        }

        // Stage 3: Build graph
        let graph = {
            trace_stage!(STAGE_GRAPH);
            observer.on_stage_start(STAGE_GRAPH);
            let clock = StageClock::start();
            let graph = SimilarityGraphBuilder::new()
                .with_overlap(cfg.overlap)
                .build(&sentences);
            let report = StageReportBuilder::new(clock.elapsed())
                .nodes(graph.num_nodes)
                .edges(graph.num_edges())
                .build();
            observer.on_stage_end(STAGE_GRAPH, &report);
            observer.on_graph(&graph);
            graph
        };

        // Stage 4: Rank
        let ranks = {
            trace_stage!(STAGE_RANK);
            observer.on_stage_start(STAGE_RANK);
            let clock = StageClock::start();
            let ranks = FixedIterationRank::new()
                .with_damping(cfg.damping)
                .with_iterations(cfg.iterations)
                .run_with(&graph, |round, scores| observer.on_rank_round(round, scores));
            let report = StageReportBuilder::new(clock.elapsed())
                .nodes(ranks.len())
                .build();
            observer.on_stage_end(STAGE_RANK, &report);
            ranks
        };

        // Stage 5: Select and join
        let selected = {
            trace_stage!(STAGE_SELECT);
            observer.on_stage_start(STAGE_SELECT);
            let clock = StageClock::start();
            let selected = SentenceSelector::new()
                .with_num_sentences(cfg.target_sentences)
                .select(&sentences, &ranks);
            observer.on_stage_end(STAGE_SELECT, &StageReport::new(clock.elapsed()));
            selected
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(selected = selected.len(), "summary assembled");

        Summary {
            text: join_sentences(&selected),
            sentences: selected,
            sentence_count,
            word_count: words,
            truncated,
            passthrough: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::OverlapMode;
    use crate::pipeline::observer::StageTimingObserver;

    /// `count` sentences of ten words each, with a shared vocabulary
    fn long_text(count: usize) -> String {
        (0..count)
            .map(|i| {
                format!(
                    "Sentence number {i} talks about rivers and the mountains near town {}.",
                    i % 4
                )
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_empty_input() {
        let summary = Summarizer::new().summarize_detailed("");

        assert_eq!(summary.text, "");
        assert!(summary.passthrough);
        assert_eq!(summary.sentence_count, 0);
    }

    #[test]
    fn test_short_input_passes_through() {
        let summary = Summarizer::new().summarize_detailed("Hello world.");

        assert_eq!(summary.text, "Hello world.");
        assert!(summary.passthrough);
        assert!(!summary.truncated);
        assert!(summary.is_empty());
    }

    #[test]
    fn test_long_input_summarized() {
        let text = long_text(40);
        let summary = Summarizer::new().summarize_detailed(&text);

        assert!(!summary.passthrough);
        assert_eq!(summary.sentence_count, 40);
        assert_eq!(summary.len(), 3);
        assert!(summary.text.len() < text.len());
        for s in &summary.sentences {
            assert!(text.contains(&s.sentence.text));
        }
    }

    #[test]
    fn test_sentences_in_reading_order() {
        let text = long_text(40);
        let summary = Summarizer::with_config(SummarizerConfig::default().with_target_sentences(5))
            .unwrap()
            .summarize_detailed(&text);

        assert_eq!(summary.len(), 5);
        for pair in summary.sentences.windows(2) {
            assert!(pair[0].sentence.index < pair[1].sentence.index);
        }
    }

    #[test]
    fn test_long_input_without_terminators() {
        let text = "word ".repeat(150);
        let summary = Summarizer::new().summarize_detailed(&text);

        assert_eq!(summary.text, "");
        assert!(!summary.passthrough);
    }

    #[test]
    fn test_truncation_flag() {
        let config = SummarizerConfig::default().with_max_input_length(20);
        let summary = Summarizer::with_config(config)
            .unwrap()
            .summarize_detailed("The quick brown fox jumps over the lazy dog.");

        assert!(summary.truncated);
        assert!(summary.passthrough);
        assert_eq!(summary.text, "The quick brown fox...");
    }

    #[test]
    fn test_truncated_input_still_ranked() {
        let text = long_text(40);
        let config = SummarizerConfig::default()
            .with_max_input_length(1000)
            .with_target_sentences(40);
        let summary = Summarizer::with_config(config)
            .unwrap()
            .summarize_detailed(&text);

        assert!(summary.truncated);
        assert!(!summary.passthrough);
        assert!(summary.word_count >= 100);

        // 14 whole sentences plus the cut fragment, which the ellipsis closes
        assert_eq!(summary.sentence_count, 15);
        assert_eq!(summary.len(), 15);
        let last = &summary.sentences[14].sentence;
        assert_eq!(last.text, " Sentence number 14 talks about rivers and...");
        assert!(summary.text.ends_with("rivers and..."));
        assert!(!summary.text.contains("number 15"));
    }

    #[test]
    fn test_truncated_input_selects_from_kept_prefix() {
        let text = long_text(40);
        let config = SummarizerConfig::default().with_max_input_length(1000);
        let summary = Summarizer::with_config(config)
            .unwrap()
            .summarize_detailed(&text);
        let kept = truncate_input(&text, 1000, "...");

        assert!(summary.truncated && !summary.passthrough);
        assert_eq!(summary.len(), 3);
        for s in &summary.sentences {
            assert!(s.sentence.index < 15);
            assert_eq!(&kept[s.sentence.start..s.sentence.end], s.sentence.text);
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SummarizerConfig::default().with_damping(3.0);
        assert!(Summarizer::with_config(config).is_err());
    }

    #[test]
    fn test_observer_sees_all_stages() {
        let mut observer = StageTimingObserver::new();
        Summarizer::new().summarize_observed(&long_text(12), &mut observer);

        assert_eq!(
            observer.stages(),
            vec![STAGE_TRUNCATE, STAGE_SPLIT, STAGE_GRAPH, STAGE_RANK, STAGE_SELECT]
        );
        assert_eq!(observer.rounds(), 30);
        let graph_report = observer.report(STAGE_GRAPH).unwrap();
        assert_eq!(graph_report.nodes, Some(12));
        assert_eq!(graph_report.edges, Some(66));
    }

    #[test]
    fn test_observer_skips_ranking_on_passthrough() {
        let mut observer = StageTimingObserver::new();
        Summarizer::new().summarize_observed("Too short.", &mut observer);

        assert_eq!(observer.stages(), vec![STAGE_TRUNCATE, STAGE_SPLIT]);
        assert_eq!(observer.rounds(), 0);
    }

    #[test]
    fn test_symmetric_overlap_still_selects_k() {
        let config = SummarizerConfig::default().with_overlap(OverlapMode::Symmetric);
        let summary = Summarizer::with_config(config)
            .unwrap()
            .summarize_detailed(&long_text(20));

        assert_eq!(summary.len(), 3);
    }

    #[test]
    fn test_summarizer_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Summarizer>();
    }
}
