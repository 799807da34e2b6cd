use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{EnrichError, EnrichResult};
use crate::types::Stage;

/// TOML-backed configuration loaded from disk.
/// Secrets (API keys, DB URL) stay as env vars.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub batch: BatchConfig,
    /// Prompt sets keyed by version number (`[prompt_sets.1]`, `[prompt_sets.2]`, ...).
    pub prompt_sets: BTreeMap<String, PromptSetConfig>,
    /// Free-form values prompts can reference as `{{config.context.<key>}}`.
    #[serde(default)]
    pub context: toml::Table,
}

/// Defaults for one scheduled batch run. CLI flags override these.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct BatchConfig {
    pub max_articles: usize,
    pub max_duration_hours: f64,
    /// Dispatches allowed per window; `0` disables throttling.
    pub window_size: usize,
    /// Window length in seconds; fractions allowed.
    pub window_seconds: f64,
    pub created_after: DateTime<Utc>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_articles: 100,
            max_duration_hours: 8.0,
            window_size: 7,
            window_seconds: 60.0,
            created_after: DateTime::parse_from_rfc3339("2024-12-31T00:00:00Z")
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_default(),
        }
    }
}

/// One versioned bundle of the four stage prompts.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PromptSetConfig {
    /// Default `provider/model` for stages that don't name one.
    pub model: String,
    #[serde(default)]
    pub temperature: f32,
    pub sentiment: StagePromptConfig,
    pub category: StagePromptConfig,
    pub emotional_impact: StagePromptConfig,
    pub clickbait: StagePromptConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StagePromptConfig {
    /// Template path, relative to the config file's directory.
    pub path: PathBuf,
    pub model: Option<String>,
    pub temperature: Option<f32>,
}

impl PromptSetConfig {
    pub fn stage(&self, stage: Stage) -> &StagePromptConfig {
        match stage {
            Stage::Sentiment => &self.sentiment,
            Stage::Category => &self.category,
            Stage::EmotionalImpact => &self.emotional_impact,
            Stage::Clickbait => &self.clickbait,
        }
    }

    pub fn model_for(&self, stage: Stage) -> &str {
        self.stage(stage).model.as_deref().unwrap_or(&self.model)
    }

    pub fn temperature_for(&self, stage: Stage) -> f32 {
        self.stage(stage).temperature.unwrap_or(self.temperature)
    }
}

impl FileConfig {
    pub fn prompt_set(&self, version: i32) -> EnrichResult<&PromptSetConfig> {
        self.prompt_sets.get(&version.to_string()).ok_or_else(|| {
            EnrichError::Configuration(format!(
                "prompt set version {version} not defined (available: {})",
                self.prompt_sets.keys().cloned().collect::<Vec<_>>().join(", ")
            ))
        })
    }
}

/// Parse a TOML document into both the typed config and the raw value tree
/// (the latter feeds `{{config.*}}` template resolution).
pub fn parse_config(content: &str) -> EnrichResult<(FileConfig, toml::Value)> {
    let value: toml::Value = content
        .parse()
        .map_err(|e| EnrichError::Configuration(format!("invalid TOML: {e}")))?;
    let config: FileConfig = value
        .clone()
        .try_into()
        .map_err(|e| EnrichError::Configuration(format!("invalid config: {e}")))?;
    Ok((config, value))
}

/// Load and parse a TOML config file.
pub fn load_config(path: &Path) -> EnrichResult<(FileConfig, toml::Value)> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        EnrichError::Configuration(format!(
            "Failed to read config file {}: {e}",
            path.display()
        ))
    })?;
    parse_config(&content).map_err(|e| match e {
        EnrichError::Configuration(msg) => {
            EnrichError::Configuration(format!("{}: {msg}", path.display()))
        }
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"
        [batch]
        max_articles = 50
        window_size = 0

        [prompt_sets.1]
        model = "google/gemini-2.5-flash-preview-04-17"
        temperature = 1.0
        sentiment = { path = "prompts/headline-sentiment-v1.txt" }
        category = { path = "prompts/category-tag-v1.txt", model = "openai/gpt-4o" }
        emotional_impact = { path = "prompts/emotional-impact-tag-v1.txt" }
        clickbait = { path = "prompts/clickbait-score-v1.txt", temperature = 0.2 }
    "#;

    #[test]
    fn parses_batch_overrides_and_keeps_defaults() {
        let (config, _) = parse_config(CONFIG).unwrap();
        assert_eq!(config.batch.max_articles, 50);
        assert_eq!(config.batch.window_size, 0);
        assert_eq!(config.batch.window_seconds, 60.0);
        assert_eq!(config.batch.max_duration_hours, 8.0);
        assert_eq!(
            config.batch.created_after.to_rfc3339(),
            "2024-12-31T00:00:00+00:00"
        );
    }

    #[test]
    fn window_seconds_accepts_fractions_and_integers() {
        let fractional = CONFIG.replace("window_size = 0", "window_size = 3\nwindow_seconds = 0.5");
        let (config, _) = parse_config(&fractional).unwrap();
        assert_eq!(config.batch.window_seconds, 0.5);

        let whole = CONFIG.replace("window_size = 0", "window_size = 3\nwindow_seconds = 30");
        let (config, _) = parse_config(&whole).unwrap();
        assert_eq!(config.batch.window_seconds, 30.0);
    }

    #[test]
    fn stage_overrides_fall_back_to_set_defaults() {
        let (config, _) = parse_config(CONFIG).unwrap();
        let set = config.prompt_set(1).unwrap();

        assert_eq!(
            set.model_for(Stage::Sentiment),
            "google/gemini-2.5-flash-preview-04-17"
        );
        assert_eq!(set.model_for(Stage::Category), "openai/gpt-4o");
        assert_eq!(set.temperature_for(Stage::EmotionalImpact), 1.0);
        assert_eq!(set.temperature_for(Stage::Clickbait), 0.2);
    }

    #[test]
    fn missing_prompt_set_is_a_configuration_error() {
        let (config, _) = parse_config(CONFIG).unwrap();
        assert!(matches!(
            config.prompt_set(3),
            Err(EnrichError::Configuration(msg)) if msg.contains("available: 1")
        ));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = parse_config(
            r#"
            [batch]
            max_artcles = 10

            [prompt_sets]
            "#,
        );
        assert!(matches!(result, Err(EnrichError::Configuration(_))));
    }
}
