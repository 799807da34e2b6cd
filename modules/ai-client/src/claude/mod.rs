mod client;
pub(crate) mod types;

use serde_json::Value;

use crate::error::{AiError, Result};

use client::ClaudeClient;
use types::*;

// =============================================================================
// Claude
// =============================================================================

/// Anthropic messages client. Structured output is obtained by forcing a
/// single tool call whose input schema is the requested response schema.
#[derive(Clone)]
pub struct Claude {
    api_key: String,
    pub(crate) model: String,
    base_url: Option<String>,
    http: reqwest::Client,
}

impl Claude {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: None,
            http: reqwest::Client::new(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn client(&self) -> ClaudeClient {
        let client = ClaudeClient::new(&self.api_key, self.http.clone());
        match self.base_url {
            Some(ref url) => client.with_base_url(url),
            None => client,
        }
    }

    /// Request a structured response and return the tool input as raw JSON.
    pub async fn extract_value(
        &self,
        system_prompt: Option<&str>,
        user_prompt: &str,
        schema_name: &str,
        schema: Value,
        temperature: f32,
    ) -> Result<Value> {
        let mut request = ChatRequest::new(&self.model)
            .message(WireMessage::user(user_prompt))
            .temperature(temperature)
            .forced_tool(ToolDefinitionWire {
                name: schema_name.to_string(),
                description: "Return the structured answer for the input.".to_string(),
                input_schema: schema,
            });
        if let Some(system) = system_prompt {
            request = request.system(system);
        }

        let response = self.client().chat(&request).await?;

        response.tool_input(schema_name).cloned().ok_or_else(|| {
            AiError::Parse(format!(
                "No structured output in Claude response (stop_reason: {})",
                response.stop_reason.as_deref().unwrap_or("unknown")
            ))
        })
    }
}
