//! Pipeline orchestration and observation.
//!
//! ## Submodules
//!
//! - [`runner`] — the [`Summarizer`] that runs truncate → split → graph →
//!   rank → select
//! - [`observer`] — logging, profiling, and debug hooks

pub mod observer;
pub mod runner;

pub use observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, StageReportBuilder,
    StageTimingObserver, STAGE_GRAPH, STAGE_RANK, STAGE_SELECT, STAGE_SPLIT, STAGE_TRUNCATE,
};
pub use runner::Summarizer;
