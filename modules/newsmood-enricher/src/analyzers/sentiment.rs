use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use newsmood_common::{
    EnrichResult, HeadlineInput, SentimentLabel, SentimentResult, Stage, StageAnalysis,
    StagePrompt, StageResult,
};

use super::{PromptedCall, StageAnalyzer};
use crate::traits::StructuredModel;

/// Classifies a headline on the five-point sentiment scale.
pub struct SentimentAnalyzer {
    call: PromptedCall,
    labels: String,
}

impl SentimentAnalyzer {
    pub fn new(prompt: StagePrompt, model: Arc<dyn StructuredModel>) -> EnrichResult<Self> {
        let labels = SentimentLabel::ALL
            .iter()
            .map(|l| l.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        Ok(Self {
            call: PromptedCall::new::<SentimentResult>(Stage::Sentiment, prompt, model)?,
            labels,
        })
    }
}

#[async_trait]
impl StageAnalyzer for SentimentAnalyzer {
    fn stage(&self) -> Stage {
        Stage::Sentiment
    }

    async fn analyze(&self, input: &HeadlineInput) -> EnrichResult<StageAnalysis> {
        let vars = HashMap::from([
            ("headline", input.headline()),
            ("categories", self.labels.as_str()),
        ]);
        let result: SentimentResult = self.call.call(input, &vars).await?;
        let result = result.validate()?;
        Ok(self.call.stage_analysis(StageResult::Sentiment(result)))
    }
}
