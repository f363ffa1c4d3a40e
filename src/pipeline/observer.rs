//! Pipeline observer — hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Use cases include timing stages, capturing intermediate
//! artifacts for debugging, and watching ranking progress round by round.

use std::time::{Duration, Instant};

use crate::graph::dense::SimilarityGraph;
use crate::types::Sentence;

pub const STAGE_TRUNCATE: &str = "truncate";
pub const STAGE_SPLIT: &str = "split";
pub const STAGE_GRAPH: &str = "graph";
pub const STAGE_RANK: &str = "rank";
pub const STAGE_SELECT: &str = "select";

/// Wall-clock timer for a single stage.
#[derive(Debug, Clone, Copy)]
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// What a stage reports when it finishes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageReport {
    pub elapsed: Duration,
    /// Node count, for stages that produce or consume a graph
    pub nodes: Option<usize>,
    /// Undirected edge count, for stages that produce a graph
    pub edges: Option<usize>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            ..Self::default()
        }
    }
}

/// Builder for [`StageReport`]s with graph statistics.
#[derive(Debug, Clone)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            report: StageReport::new(elapsed),
        }
    }

    pub fn nodes(mut self, nodes: usize) -> Self {
        self.report.nodes = Some(nodes);
        self
    }

    pub fn edges(mut self, edges: usize) -> Self {
        self.report.edges = Some(edges);
        self
    }

    pub fn build(self) -> StageReport {
        self.report
    }
}

/// Callbacks invoked while a summary is computed.
///
/// Every method has an empty default, so implementors only override what
/// they care about. Stages skipped by a short-circuit get no callbacks.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    /// Called with the split sentences.
    fn on_sentences(&mut self, _sentences: &[Sentence]) {}

    /// Called with the finished similarity graph.
    fn on_graph(&mut self, _graph: &SimilarityGraph) {}

    /// Called after each ranking round with the 1-based round number.
    fn on_rank_round(&mut self, _round: usize, _scores: &[f64]) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that records how long each stage took, in execution order.
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    timings: Vec<(&'static str, StageReport)>,
    rounds: usize,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded stages and their reports
    pub fn timings(&self) -> &[(&'static str, StageReport)] {
        &self.timings
    }

    /// Names of the stages that ran
    pub fn stages(&self) -> Vec<&'static str> {
        self.timings.iter().map(|(stage, _)| *stage).collect()
    }

    /// Report for one stage, if it ran
    pub fn report(&self, stage: &str) -> Option<&StageReport> {
        self.timings
            .iter()
            .find(|(name, _)| *name == stage)
            .map(|(_, report)| report)
    }

    /// Number of ranking rounds observed
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Sum of all stage durations
    pub fn total(&self) -> Duration {
        self.timings.iter().map(|(_, r)| r.elapsed).sum()
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.timings.push((stage, report.clone()));
    }

    fn on_rank_round(&mut self, round: usize, _scores: &[f64]) {
        self.rounds = round;
    }
}
