use std::collections::HashMap;
use std::path::Path;

use crate::error::{EnrichError, EnrichResult};
use crate::file_config::FileConfig;
use crate::template::PromptTemplate;
use crate::types::{Stage, StageProvenance};

/// Allowed runtime variables per stage prompt.
const SENTIMENT_RUNTIME_VARS: &[&str] = &["headline", "categories"];
const CATEGORY_RUNTIME_VARS: &[&str] = &["headline", "description", "category_tags_list"];
const EMOTIONAL_IMPACT_RUNTIME_VARS: &[&str] = &["headline", "emotional_impact_tags_list"];
const CLICKBAIT_RUNTIME_VARS: &[&str] = &["headline"];

pub fn allowed_runtime_vars(stage: Stage) -> &'static [&'static str] {
    match stage {
        Stage::Sentiment => SENTIMENT_RUNTIME_VARS,
        Stage::Category => CATEGORY_RUNTIME_VARS,
        Stage::EmotionalImpact => EMOTIONAL_IMPACT_RUNTIME_VARS,
        Stage::Clickbait => CLICKBAIT_RUNTIME_VARS,
    }
}

/// Everything one analyzer needs about its prompt: the parsed template and
/// the model settings recorded as provenance.
#[derive(Debug, Clone)]
pub struct StagePrompt {
    pub stage: Stage,
    pub version: i32,
    pub path: String,
    pub model: String,
    pub temperature: f32,
    pub template: PromptTemplate,
}

impl StagePrompt {
    pub fn render(&self, vars: &HashMap<&str, &str>) -> String {
        self.template.render(vars)
    }

    pub fn provenance(&self) -> StageProvenance {
        StageProvenance {
            prompt_version: self.version,
            path: self.path.clone(),
            model: self.model.clone(),
            temperature: self.temperature,
        }
    }
}

/// The selected prompt set, with every template loaded and validated.
#[derive(Debug, Clone)]
pub struct PromptRegistry {
    version: i32,
    sentiment: StagePrompt,
    category: StagePrompt,
    emotional_impact: StagePrompt,
    clickbait: StagePrompt,
}

impl PromptRegistry {
    /// Load all four prompt files of `version`, resolve config vars and
    /// validate runtime vars. Any failure is a configuration error.
    pub fn load(
        config: &FileConfig,
        version: i32,
        config_dir: &Path,
        toml_value: &toml::Value,
    ) -> EnrichResult<Self> {
        let load = |stage| load_stage(config, version, stage, config_dir, toml_value);

        Ok(Self {
            version,
            sentiment: load(Stage::Sentiment)?,
            category: load(Stage::Category)?,
            emotional_impact: load(Stage::EmotionalImpact)?,
            clickbait: load(Stage::Clickbait)?,
        })
    }

    pub fn version(&self) -> i32 {
        self.version
    }

    pub fn stage(&self, stage: Stage) -> &StagePrompt {
        match stage {
            Stage::Sentiment => &self.sentiment,
            Stage::Category => &self.category,
            Stage::EmotionalImpact => &self.emotional_impact,
            Stage::Clickbait => &self.clickbait,
        }
    }

    /// Distinct model identifiers used by this prompt set.
    pub fn models(&self) -> Vec<&str> {
        let mut models: Vec<&str> = Vec::new();
        for stage in Stage::ORDER {
            let model = self.stage(stage).model.as_str();
            if !models.contains(&model) {
                models.push(model);
            }
        }
        models
    }
}

fn load_stage(
    config: &FileConfig,
    version: i32,
    stage: Stage,
    config_dir: &Path,
    toml_value: &toml::Value,
) -> EnrichResult<StagePrompt> {
    let set = config.prompt_set(version)?;
    let stage_config = set.stage(stage);
    let full_path = config_dir.join(&stage_config.path);

    let content = std::fs::read_to_string(&full_path).map_err(|e| {
        EnrichError::Configuration(format!(
            "Failed to read {stage} prompt file {}: {e}",
            full_path.display()
        ))
    })?;

    let template = PromptTemplate::parse(&content, toml_value, allowed_runtime_vars(stage))
        .map_err(|e| {
            EnrichError::Configuration(format!(
                "Template validation failed for {stage} prompt {}: {e}",
                full_path.display()
            ))
        })?;

    Ok(StagePrompt {
        stage,
        version,
        path: stage_config.path.display().to_string(),
        model: set.model_for(stage).to_string(),
        temperature: set.temperature_for(stage),
        template,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file_config::parse_config;

    const CONFIG: &str = r#"
        [context]
        audience = "general readers"

        [prompt_sets.2]
        model = "openai/gpt-4o"
        temperature = 1.0
        sentiment = { path = "sentiment.txt" }
        category = { path = "category.txt" }
        emotional_impact = { path = "emotional.txt", model = "anthropic/claude-haiku-4-5" }
        clickbait = { path = "clickbait.txt", temperature = 0.0 }
    "#;

    fn write_prompts(dir: &Path, sentiment: &str) {
        std::fs::write(dir.join("sentiment.txt"), sentiment).unwrap();
        std::fs::write(
            dir.join("category.txt"),
            "{{headline}}\n{{description}}\n{{category_tags_list}}",
        )
        .unwrap();
        std::fs::write(
            dir.join("emotional.txt"),
            "For {{config.context.audience}}: {{headline}}\n{{emotional_impact_tags_list}}",
        )
        .unwrap();
        std::fs::write(dir.join("clickbait.txt"), "Score {{headline}}").unwrap();
    }

    #[test]
    fn loads_every_stage_with_provenance() {
        let dir = tempfile::tempdir().unwrap();
        write_prompts(dir.path(), "Classify {{headline}} as one of {{categories}}");
        let (config, toml_value) = parse_config(CONFIG).unwrap();

        let registry = PromptRegistry::load(&config, 2, dir.path(), &toml_value).unwrap();

        assert_eq!(registry.version(), 2);
        let emotional = registry.stage(Stage::EmotionalImpact);
        assert_eq!(emotional.model, "anthropic/claude-haiku-4-5");
        assert_eq!(
            emotional.render(&HashMap::from([
                ("headline", "Flood warning issued"),
                ("emotional_impact_tags_list", "1. Anxiety / Fear\n"),
            ])),
            "For general readers: Flood warning issued\n1. Anxiety / Fear\n"
        );

        let provenance = registry.stage(Stage::Clickbait).provenance();
        assert_eq!(provenance.prompt_version, 2);
        assert_eq!(provenance.path, "clickbait.txt");
        assert_eq!(provenance.model, "openai/gpt-4o");
        assert_eq!(provenance.temperature, 0.0);

        assert_eq!(
            registry.models(),
            vec!["openai/gpt-4o", "anthropic/claude-haiku-4-5"]
        );
    }

    #[test]
    fn variable_from_another_stage_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_prompts(dir.path(), "{{headline}} {{category_tags_list}}");
        let (config, toml_value) = parse_config(CONFIG).unwrap();

        let err = PromptRegistry::load(&config, 2, dir.path(), &toml_value).unwrap_err();
        assert!(matches!(err, EnrichError::Configuration(msg) if msg.contains("sentiment")));
    }

    #[test]
    fn missing_or_empty_prompt_file_is_a_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let (config, toml_value) = parse_config(CONFIG).unwrap();
        assert!(matches!(
            PromptRegistry::load(&config, 2, dir.path(), &toml_value),
            Err(EnrichError::Configuration(_))
        ));

        write_prompts(dir.path(), "   ");
        assert!(matches!(
            PromptRegistry::load(&config, 2, dir.path(), &toml_value),
            Err(EnrichError::Configuration(msg)) if msg.contains("empty")
        ));
    }

    #[test]
    fn unknown_version_is_a_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        write_prompts(dir.path(), "{{headline}}");
        let (config, toml_value) = parse_config(CONFIG).unwrap();

        assert!(PromptRegistry::load(&config, 1, dir.path(), &toml_value).is_err());
    }
}
