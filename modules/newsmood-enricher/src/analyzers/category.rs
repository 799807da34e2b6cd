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

/// Tags a headline with a primary topic and up to two secondary topics.
/// The description, when present, is part of the prompt.
pub struct CategoryAnalyzer {
    call: PromptedCall,
    vocabulary: Arc<TagVocabulary>,
}

impl CategoryAnalyzer {
    pub fn new(
        prompt: StagePrompt,
        model: Arc<dyn StructuredModel>,
        vocabulary: Arc<TagVocabulary>,
    ) -> EnrichResult<Self> {
        if vocabulary.catalog() != TagCatalog::Category {
            return Err(EnrichError::Configuration(format!(
                "category analyzer needs the category vocabulary, got {}",
                vocabulary.catalog()
            )));
        }
        Ok(Self {
            call: PromptedCall::new::<TagResult>(Stage::Category, prompt, model)?,
            vocabulary,
        })
    }
}

#[async_trait]
impl StageAnalyzer for CategoryAnalyzer {
    fn stage(&self) -> Stage {
        Stage::Category
    }

    async fn analyze(&self, input: &HeadlineInput) -> EnrichResult<StageAnalysis> {
        let vars = HashMap::from([
            ("headline", input.headline()),
            ("description", input.description().unwrap_or("")),
            ("category_tags_list", self.vocabulary.listing()),
        ]);
        let raw: TagResult = self.call.call(input, &vars).await?;

        let result = TagResult {
            secondary_tags: filter_secondary_tags(&raw.secondary_tags, &self.vocabulary),
            primary_tag: raw.primary_tag,
        };
        Ok(self.call.stage_analysis(StageResult::Category(result)))
    }
}
