use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use newsmood_common::{
    ClickbaitResult, EnrichResult, HeadlineInput, Stage, StageAnalysis, StagePrompt, StageResult,
};

use super::{PromptedCall, StageAnalyzer};
use crate::traits::StructuredModel;

/// Scores how clickbait-y a headline reads, 1 (not at all) to 5.
pub struct ClickbaitAnalyzer {
    call: PromptedCall,
}

impl ClickbaitAnalyzer {
    pub fn new(prompt: StagePrompt, model: Arc<dyn StructuredModel>) -> EnrichResult<Self> {
        Ok(Self {
            call: PromptedCall::new::<ClickbaitResult>(Stage::Clickbait, prompt, model)?,
        })
    }
}

#[async_trait]
impl StageAnalyzer for ClickbaitAnalyzer {
    fn stage(&self) -> Stage {
        Stage::Clickbait
    }

    async fn analyze(&self, input: &HeadlineInput) -> EnrichResult<StageAnalysis> {
        let vars = HashMap::from([("headline", input.headline())]);
        let result: ClickbaitResult = self.call.call(input, &vars).await?;
        Ok(self.call.stage_analysis(StageResult::Clickbait(result)))
    }
}
