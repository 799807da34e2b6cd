use crate::error::{EnrichError, EnrichResult};

/// Application configuration loaded from environment variables.
/// Contains only secrets and env-specific values; batch defaults, models
/// and prompts live in the TOML FileConfig.
#[derive(Debug, Clone)]
pub struct AppConfig {
    // Database
    pub database_url: Option<String>,

    // AI / LLM (each needed only if a stage model uses that provider)
    pub openai_api_key: Option<String>,
    pub anthropic_api_key: Option<String>,
    pub google_api_key: Option<String>,

    // Prompts
    pub prompt_config_version: i32,
}

impl AppConfig {
    pub fn from_env() -> EnrichResult<Self> {
        dotenvy::dotenv().ok();
        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        config.log_keys();
        Ok(config)
    }

    /// Build from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> EnrichResult<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let prompt_config_version = match var("PROMPT_CONFIG_VERSION") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                EnrichError::Configuration(format!(
                    "PROMPT_CONFIG_VERSION must be an integer, got {raw:?}"
                ))
            })?,
            None => 1,
        };

        Ok(Self {
            database_url: var("DATABASE_URL"),
            openai_api_key: var("OPENAI_API_KEY"),
            anthropic_api_key: var("ANTHROPIC_API_KEY"),
            google_api_key: var("GOOGLE_API_KEY"),
            prompt_config_version,
        })
    }

    pub fn require_database_url(&self) -> EnrichResult<&str> {
        self.database_url.as_deref().ok_or_else(|| {
            EnrichError::Configuration("DATABASE_URL environment variable not set".into())
        })
    }

    fn log_keys(&self) {
        fn preview_opt(val: &Option<String>) -> String {
            match val {
                Some(v) => {
                    let head: String = v.chars().take(5).collect();
                    format!("{}...({} chars)", head, v.chars().count())
                }
                None => "<not set>".to_string(),
            }
        }

        tracing::info!("Config loaded:");
        tracing::info!("  DATABASE_URL: {}", if self.database_url.is_some() { "<set>" } else { "<not set>" });
        tracing::info!("  OPENAI_API_KEY: {}", preview_opt(&self.openai_api_key));
        tracing::info!("  ANTHROPIC_API_KEY: {}", preview_opt(&self.anthropic_api_key));
        tracing::info!("  GOOGLE_API_KEY: {}", preview_opt(&self.google_api_key));
        tracing::info!("  PROMPT_CONFIG_VERSION: {}", self.prompt_config_version);
    }
}
