pub mod analyzers;
pub mod pipeline;
pub mod provider;
pub mod scheduling;
pub mod tag_filter;
pub mod traits;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use analyzers::{build_analyzers, AnalyzerSet, StageAnalyzer};
pub use pipeline::{PipelineExecutor, PipelineFailure, PipelineOutcome, PipelineStep};
pub use provider::{ModelRouter, Provider};
pub use scheduling::{BatchReport, BatchScheduler, BatchSettings, SlidingWindowLimiter};
pub use tag_filter::filter_secondary_tags;
pub use traits::{AnalysisStore, AnalysisWrite, BacklogSource, ModelRequest, StructuredModel};
