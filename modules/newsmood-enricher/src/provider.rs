use std::collections::HashMap;

use ai_client::{AiError, Claude, OpenAi};
use async_trait::async_trait;
use tracing::debug;

use newsmood_common::{AppConfig, EnrichError, EnrichResult};

use crate::traits::{ModelRequest, StructuredModel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    OpenAi,
    Anthropic,
    Google,
}

impl Provider {
    /// Split `provider/model` into the provider and the bare model name.
    pub fn parse(model_id: &str) -> EnrichResult<(Provider, &str)> {
        let (prefix, model) = model_id.split_once('/').ok_or_else(|| {
            EnrichError::Configuration(format!(
                "model {model_id:?} has no provider prefix (openai/, anthropic/, google/)"
            ))
        })?;
        if model.is_empty() {
            return Err(EnrichError::Configuration(format!(
                "model {model_id:?} has an empty model name"
            )));
        }
        let provider = match prefix {
            "openai" => Provider::OpenAi,
            "anthropic" => Provider::Anthropic,
            "google" => Provider::Google,
            other => {
                return Err(EnrichError::Configuration(format!(
                    "unknown model provider {other:?} in {model_id:?}"
                )))
            }
        };
        Ok((provider, model))
    }

    fn key_var(self) -> &'static str {
        match self {
            Provider::OpenAi => "OPENAI_API_KEY",
            Provider::Anthropic => "ANTHROPIC_API_KEY",
            Provider::Google => "GOOGLE_API_KEY",
        }
    }

    fn api_key(self, config: &AppConfig) -> Option<&str> {
        match self {
            Provider::OpenAi => config.openai_api_key.as_deref(),
            Provider::Anthropic => config.anthropic_api_key.as_deref(),
            Provider::Google => config.google_api_key.as_deref(),
        }
    }
}

enum Client {
    OpenAi(OpenAi),
    Claude(Claude),
}

/// Routes each request to a client chosen by its model's provider prefix.
/// All clients are built up front so a missing key fails at startup.
pub struct ModelRouter {
    clients: HashMap<String, Client>,
}

impl ModelRouter {
    pub fn new<'a>(
        models: impl IntoIterator<Item = &'a str>,
        config: &AppConfig,
        http: reqwest::Client,
    ) -> EnrichResult<Self> {
        let mut clients = HashMap::new();
        for model_id in models {
            let (provider, model) = Provider::parse(model_id)?;
            let api_key = provider.api_key(config).ok_or_else(|| {
                EnrichError::Configuration(format!(
                    "{} is required for model {model_id}",
                    provider.key_var()
                ))
            })?;
            let client = match provider {
                Provider::OpenAi => {
                    Client::OpenAi(OpenAi::new(api_key, model).with_http_client(http.clone()))
                }
                Provider::Google => {
                    Client::OpenAi(OpenAi::gemini(api_key, model).with_http_client(http.clone()))
                }
                Provider::Anthropic => {
                    Client::Claude(Claude::new(api_key, model).with_http_client(http.clone()))
                }
            };
            clients.insert(model_id.to_string(), client);
        }
        Ok(Self { clients })
    }
}

fn map_ai_error(model: &str, error: AiError) -> EnrichError {
    match error {
        AiError::Parse(msg) => EnrichError::SchemaValidation(format!("{model}: {msg}")),
        other => EnrichError::Provider(format!("{model}: {other}")),
    }
}

#[async_trait]
impl StructuredModel for ModelRouter {
    async fn invoke(&self, request: ModelRequest<'_>) -> EnrichResult<serde_json::Value> {
        let client = self.clients.get(request.model).ok_or_else(|| {
            EnrichError::Configuration(format!("no client configured for {}", request.model))
        })?;

        debug!(model = request.model, schema = request.schema_name, "Invoking model");

        let result = match client {
            Client::OpenAi(ai) => {
                ai.extract_value(
                    None,
                    request.prompt,
                    request.schema_name,
                    request.schema.clone(),
                    request.temperature,
                )
                .await
            }
            Client::Claude(ai) => {
                ai.extract_value(
                    None,
                    request.prompt,
                    request.schema_name,
                    request.schema.clone(),
                    request.temperature,
                )
                .await
            }
        };

        result.map_err(|e| map_ai_error(request.model, e))
    }
}
