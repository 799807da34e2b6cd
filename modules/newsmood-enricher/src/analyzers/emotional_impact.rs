use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use newsmood_common::{
    EnrichError, EnrichResult, HeadlineInput, Stage, StageAnalysis, StagePrompt, StageResult,
    TagCatalog, TagResult, TagVocabulary,
};

use super::{PromptedCall, StageAnalyzer};
use crate::tag_filter::filter_secondary_tags;
use crate::traits::StructuredModel;

/// Tags the emotional response a headline is likely to evoke.
pub struct EmotionalImpactAnalyzer {
    call: PromptedCall,
    vocabulary: Arc<TagVocabulary>,
}

impl EmotionalImpactAnalyzer {
    pub fn new(
        prompt: StagePrompt,
        model: Arc<dyn StructuredModel>,
        vocabulary: Arc<TagVocabulary>,
    ) -> EnrichResult<Self> {
        if vocabulary.catalog() != TagCatalog::EmotionalImpact {
            return Err(EnrichError::Configuration(format!(
                "emotional impact analyzer needs the emotional impact vocabulary, got {}",
                vocabulary.catalog()
            )));
        }
        Ok(Self {
            call: PromptedCall::new::<TagResult>(Stage::EmotionalImpact, prompt, model)?,
            vocabulary,
        })
    }
}

#[async_trait]
impl StageAnalyzer for EmotionalImpactAnalyzer {
    fn stage(&self) -> Stage {
        Stage::EmotionalImpact
    }

    async fn analyze(&self, input: &HeadlineInput) -> EnrichResult<StageAnalysis> {
        let vars = HashMap::from([
            ("headline", input.headline()),
            ("emotional_impact_tags_list", self.vocabulary.listing()),
        ]);
        let raw: TagResult = self.call.call(input, &vars).await?;

        let result = TagResult {
            secondary_tags: filter_secondary_tags(&raw.secondary_tags, &self.vocabulary),
            primary_tag: raw.primary_tag,
        };
        Ok(self.call.stage_analysis(StageResult::EmotionalImpact(result)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{stage_prompt, MockModel};
    use serde_json::json;

    #[tokio::test]
    async fn uses_emotional_impact_listing_and_filters() {
        let model = Arc::new(MockModel::new().on_schema(
            "TagResult",
            json!({
                "primary_tag": "Anxiety / Fear",
                "secondary_tags": ["Stress / Overwhelm", "Housing Crisis"]
            }),
        ));
        let prompt = stage_prompt(
            Stage::EmotionalImpact,
            "{{headline}}\n{{emotional_impact_tags_list}}",
            "anthropic/claude-haiku-4-5",
        );
        let analyzer = EmotionalImpactAnalyzer::new(
            prompt,
            model.clone(),
            Arc::new(TagVocabulary::new(TagCatalog::EmotionalImpact)),
        )
        .unwrap();
        let input = HeadlineInput::new(5, "Storm warning for the coast", None).unwrap();

        let analysis = analyzer.analyze(&input).await.unwrap();

        assert_eq!(
            analysis.result,
            StageResult::EmotionalImpact(TagResult {
                primary_tag: "Anxiety / Fear".into(),
                secondary_tags: vec!["Stress / Overwhelm".into()],
            })
        );
        assert_eq!(analysis.provenance.model, "anthropic/claude-haiku-4-5");
        assert!(model.prompts()[0].contains("\n1. Relief / Reassurance\n"));
    }
}
