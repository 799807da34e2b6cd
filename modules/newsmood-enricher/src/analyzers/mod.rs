//! The four stage analyzers and the shared prompt-then-parse call they make.

mod category;
mod clickbait;
mod emotional_impact;
mod sentiment;

use std::collections::HashMap;
use std::sync::Arc;

use ai_client::StructuredOutput;
use async_trait::async_trait;
use tracing::debug;

use newsmood_common::{
    AnalysisRecord, EnrichError, EnrichResult, HeadlineInput, PromptRegistry, Stage,
    StageAnalysis, StagePrompt, StageResult, TagCatalog, TagVocabulary,
};

use crate::pipeline::{PipelineFailure, PipelineStep, RecordDraft};
use crate::traits::{ModelRequest, StructuredModel};

pub use category::CategoryAnalyzer;
pub use clickbait::ClickbaitAnalyzer;
pub use emotional_impact::EmotionalImpactAnalyzer;
pub use sentiment::SentimentAnalyzer;

/// One pipeline stage: headline in, validated result plus provenance out.
#[async_trait]
pub trait StageAnalyzer: Send + Sync {
    fn stage(&self) -> Stage;

    async fn analyze(&self, input: &HeadlineInput) -> EnrichResult<StageAnalysis>;
}

// ---------------------------------------------------------------------------
// PromptedCall
// ---------------------------------------------------------------------------

/// A stage prompt bound to a model and a response schema.
pub(crate) struct PromptedCall {
    prompt: StagePrompt,
    model: Arc<dyn StructuredModel>,
    schema_name: String,
    schema: serde_json::Value,
}

impl PromptedCall {
    /// Fails with a configuration error if `prompt` belongs to another stage.
    pub(crate) fn new<T: StructuredOutput>(
        stage: Stage,
        prompt: StagePrompt,
        model: Arc<dyn StructuredModel>,
    ) -> EnrichResult<Self> {
        if prompt.stage != stage {
            return Err(EnrichError::Configuration(format!(
                "{stage} analyzer was given the {} prompt ({})",
                prompt.stage, prompt.path
            )));
        }
        Ok(Self {
            prompt,
            model,
            schema_name: T::response_name(),
            schema: T::strict_schema(),
        })
    }

    /// Render the prompt, call the model and parse the response as `T`.
    pub(crate) async fn call<T: StructuredOutput>(
        &self,
        input: &HeadlineInput,
        vars: &HashMap<&str, &str>,
    ) -> EnrichResult<T> {
        let prompt_text = self.prompt.render(vars);

        debug!(
            article_id = input.article_id(),
            stage = %self.prompt.stage,
            model = %self.prompt.model,
            "Analyzing headline"
        );

        let value = self
            .model
            .invoke(ModelRequest {
                model: &self.prompt.model,
                prompt: &prompt_text,
                schema_name: &self.schema_name,
                schema: &self.schema,
                temperature: self.prompt.temperature,
            })
            .await?;

        serde_json::from_value(value).map_err(|e| {
            EnrichError::SchemaValidation(format!(
                "{} response does not match {}: {e}",
                self.prompt.stage, self.schema_name
            ))
        })
    }

    pub(crate) fn stage_analysis(&self, result: StageResult) -> StageAnalysis {
        StageAnalysis {
            result,
            provenance: self.prompt.provenance(),
        }
    }
}

// ---------------------------------------------------------------------------
// AnalyzerSet
// ---------------------------------------------------------------------------

/// The four analyzers in pipeline order.
#[derive(Clone)]
pub struct AnalyzerSet {
    analyzers: [Arc<dyn StageAnalyzer>; 4],
}

impl AnalyzerSet {
    /// Fails if an analyzer sits in the wrong slot.
    pub fn new(
        sentiment: Arc<dyn StageAnalyzer>,
        category: Arc<dyn StageAnalyzer>,
        emotional_impact: Arc<dyn StageAnalyzer>,
        clickbait: Arc<dyn StageAnalyzer>,
    ) -> EnrichResult<Self> {
        let analyzers = [sentiment, category, emotional_impact, clickbait];
        for (expected, analyzer) in Stage::ORDER.iter().zip(&analyzers) {
            if analyzer.stage() != *expected {
                return Err(EnrichError::Configuration(format!(
                    "expected a {expected} analyzer, got {}",
                    analyzer.stage()
                )));
            }
        }
        Ok(Self { analyzers })
    }

    /// Run every stage in order and assemble the record. Stops at the first
    /// failing stage.
    pub async fn analyze(&self, input: &HeadlineInput) -> Result<AnalysisRecord, PipelineFailure> {
        let mut draft = RecordDraft::new(input.article_id());

        for analyzer in &self.analyzers {
            let step = PipelineStep::Stage(analyzer.stage());
            let analysis = analyzer
                .analyze(input)
                .await
                .map_err(|error| PipelineFailure::new(input.article_id(), step, error))?;
            draft
                .accept(analysis)
                .map_err(|error| PipelineFailure::new(input.article_id(), step, error))?;
        }

        draft.finish().map_err(|error| {
            PipelineFailure::new(input.article_id(), PipelineStep::Persist, error)
        })
    }
}

/// Build the production analyzers from the loaded prompt set.
pub fn build_analyzers(
    prompts: &PromptRegistry,
    model: Arc<dyn StructuredModel>,
) -> EnrichResult<AnalyzerSet> {
    let categories = Arc::new(TagVocabulary::new(TagCatalog::Category));
    let emotional_impacts = Arc::new(TagVocabulary::new(TagCatalog::EmotionalImpact));

    AnalyzerSet::new(
        Arc::new(SentimentAnalyzer::new(
            prompts.stage(Stage::Sentiment).clone(),
            model.clone(),
        )?),
        Arc::new(CategoryAnalyzer::new(
            prompts.stage(Stage::Category).clone(),
            model.clone(),
            categories,
        )?),
        Arc::new(EmotionalImpactAnalyzer::new(
            prompts.stage(Stage::EmotionalImpact).clone(),
            model.clone(),
            emotional_impacts,
        )?),
        Arc::new(ClickbaitAnalyzer::new(
            prompts.stage(Stage::Clickbait).clone(),
            model,
        )?),
    )
}
