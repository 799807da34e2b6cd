// Per-article pipeline: Sentiment → Category → EmotionalImpact → Clickbait → Persist.
//
// No branching, no parallelism, no retries. The first failing step aborts the
// article and nothing is written, including a half-finished persist.

use std::sync::Arc;

use tracing::info;

use newsmood_common::{
    AnalysisRecord, Annotated, ClickbaitResult, EnrichError, EnrichResult, HeadlineInput,
    SentimentResult, Stage, StageAnalysis, StageProvenance, StageResult, TagCatalog, TagResult,
};
use newsmood_store::{InsertOutcome, NewAnalysis};

use crate::analyzers::AnalyzerSet;
use crate::traits::AnalysisStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStep {
    Input,
    Stage(Stage),
    Persist,
}

impl std::fmt::Display for PipelineStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineStep::Input => write!(f, "input"),
            PipelineStep::Stage(stage) => write!(f, "{stage}"),
            PipelineStep::Persist => write!(f, "persist"),
        }
    }
}

/// An article that did not make it through the pipeline.
#[derive(Debug, thiserror::Error)]
#[error("article {article_id} failed at {step}: {error}")]
pub struct PipelineFailure {
    pub article_id: i64,
    pub step: PipelineStep,
    #[source]
    pub error: EnrichError,
}

impl PipelineFailure {
    pub fn new(article_id: i64, step: PipelineStep, error: EnrichError) -> Self {
        Self {
            article_id,
            step,
            error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineOutcome {
    Persisted { record_id: i64 },
    /// A record for this article already existed; nothing was written.
    AlreadyAnalyzed,
}

// ---------------------------------------------------------------------------
// RecordDraft
// ---------------------------------------------------------------------------

/// Stage results accumulated for one article, in pipeline order.
#[derive(Debug)]
pub(crate) struct RecordDraft {
    article_id: i64,
    sentiment: Option<Annotated<SentimentResult>>,
    category: Option<Annotated<TagResult>>,
    emotional_impact: Option<Annotated<TagResult>>,
    clickbait: Option<Annotated<ClickbaitResult>>,
}

impl RecordDraft {
    pub(crate) fn new(article_id: i64) -> Self {
        Self {
            article_id,
            sentiment: None,
            category: None,
            emotional_impact: None,
            clickbait: None,
        }
    }

    pub(crate) fn accept(&mut self, analysis: StageAnalysis) -> EnrichResult<()> {
        fn put<T>(
            slot: &mut Option<Annotated<T>>,
            result: T,
            provenance: StageProvenance,
            stage: Stage,
        ) -> EnrichResult<()> {
            if slot.is_some() {
                return Err(EnrichError::Configuration(format!(
                    "{stage} result produced twice"
                )));
            }
            *slot = Some(Annotated { result, provenance });
            Ok(())
        }

        let StageAnalysis { result, provenance } = analysis;
        match result {
            StageResult::Sentiment(r) => put(&mut self.sentiment, r, provenance, Stage::Sentiment),
            StageResult::Category(r) => put(&mut self.category, r, provenance, Stage::Category),
            StageResult::EmotionalImpact(r) => {
                put(&mut self.emotional_impact, r, provenance, Stage::EmotionalImpact)
            }
            StageResult::Clickbait(r) => put(&mut self.clickbait, r, provenance, Stage::Clickbait),
        }
    }

    /// All four stages are required.
    pub(crate) fn finish(self) -> EnrichResult<AnalysisRecord> {
        let missing = |stage: Stage| {
            EnrichError::Configuration(format!("no {stage} result for article {}", self.article_id))
        };
        Ok(AnalysisRecord {
            article_id: self.article_id,
            sentiment: self.sentiment.ok_or_else(|| missing(Stage::Sentiment))?,
            category: self.category.ok_or_else(|| missing(Stage::Category))?,
            emotional_impact: self
                .emotional_impact
                .ok_or_else(|| missing(Stage::EmotionalImpact))?,
            clickbait: self.clickbait.ok_or_else(|| missing(Stage::Clickbait))?,
        })
    }
}

// ---------------------------------------------------------------------------
// PipelineExecutor
// ---------------------------------------------------------------------------

pub struct PipelineExecutor {
    analyzers: AnalyzerSet,
    store: Arc<dyn AnalysisStore>,
}

impl PipelineExecutor {
    pub fn new(analyzers: AnalyzerSet, store: Arc<dyn AnalysisStore>) -> Self {
        Self { analyzers, store }
    }

    /// Run all four stages without persisting.
    pub async fn analyze(&self, input: &HeadlineInput) -> Result<AnalysisRecord, PipelineFailure> {
        self.analyzers.analyze(input).await
    }

    /// Analyze, then write the record and its tag associations.
    pub async fn run(&self, input: &HeadlineInput) -> Result<PipelineOutcome, PipelineFailure> {
        let record = self.analyze(input).await?;
        self.persist(&record)
            .await
            .map_err(|error| PipelineFailure::new(record.article_id, PipelineStep::Persist, error))
    }

    /// The sentiment row and both tag sets commit together or not at all.
    async fn persist(&self, record: &AnalysisRecord) -> EnrichResult<PipelineOutcome> {
        let mut write = self.store.begin().await?;
        let outcome = write
            .insert_analysis(&NewAnalysis::from_record(record))
            .await?;

        let record_id = match outcome {
            InsertOutcome::Inserted(id) => id,
            InsertOutcome::AlreadyExists => {
                info!(article_id = record.article_id, "Article already analyzed, skipping");
                return Ok(PipelineOutcome::AlreadyAnalyzed);
            }
        };

        write
            .insert_tag_associations(
                record_id,
                &record.category.result.primary_tag,
                &record.category.result.secondary_tags,
                TagCatalog::Category,
            )
            .await?;
        write
            .insert_tag_associations(
                record_id,
                &record.emotional_impact.result.primary_tag,
                &record.emotional_impact.result.secondary_tags,
                TagCatalog::EmotionalImpact,
            )
            .await?;
        write.commit().await?;

        info!(
            article_id = record.article_id,
            record_id,
            sentiment = %record.sentiment.result.sentiment,
            clickbait = record.clickbait.result.score.value(),
            "Stored analysis"
        );
        Ok(PipelineOutcome::Persisted { record_id })
    }
}
