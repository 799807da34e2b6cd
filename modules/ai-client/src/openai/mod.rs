mod client;
pub(crate) mod types;

use serde_json::Value;

use crate::error::Result;
use crate::util::parse_json_payload;

use client::OpenAiClient;
use types::{StructuredRequest, WireMessage};

/// Google's OpenAI-compatible endpoint for Gemini models.
pub const GEMINI_OPENAI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

// =============================================================================
// OpenAi
// =============================================================================

/// Chat-completions client for OpenAI and OpenAI-compatible endpoints.
#[derive(Clone)]
pub struct OpenAi {
    api_key: String,
    pub(crate) model: String,
    base_url: Option<String>,
    http: reqwest::Client,
}

impl OpenAi {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: None,
            http: reqwest::Client::new(),
        }
    }

    /// Gemini through Google's OpenAI-compatible surface.
    pub fn gemini(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::new(api_key, model).with_base_url(GEMINI_OPENAI_BASE_URL)
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Share a connection pool across clients.
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn client(&self) -> OpenAiClient {
        let client = OpenAiClient::new(&self.api_key, self.http.clone());
        match self.base_url {
            Some(ref url) => client.with_base_url(url),
            None => client,
        }
    }

    /// Request a strict structured response and return it as raw JSON.
    ///
    /// The caller owns the schema; the payload is only checked for being JSON.
    pub async fn extract_value(
        &self,
        system_prompt: Option<&str>,
        user_prompt: &str,
        schema_name: &str,
        schema: Value,
        temperature: f32,
    ) -> Result<Value> {
        let mut request = StructuredRequest::new(&self.model, schema_name, schema);
        if let Some(system) = system_prompt {
            request = request.message(WireMessage::system(system));
        }
        let request = request
            .message(WireMessage::user(user_prompt))
            .temperature(temperature);

        let text = self.client().structured_output(&request).await?;
        parse_json_payload(&text)
    }
}
