use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use tracing::debug;

use super::types::*;
use crate::error::{AiError, Result};

const OPENAI_API_URL: &str = "https://api.openai.com/v1";

pub(crate) struct OpenAiClient {
    api_key: String,
    http: reqwest::Client,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(api_key: &str, http: reqwest::Client) -> Self {
        Self {
            api_key: api_key.to_string(),
            http,
            base_url: OPENAI_API_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    /// Send a structured-output request and return the assistant's raw text.
    pub async fn structured_output(&self, request: &StructuredRequest) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);

        debug!(model = %request.model, schema = %request.response_format.json_schema.name, "OpenAI structured output request");

        let response = self
            .http
            .post(&url)
            .headers(self.headers()?)
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(AiError::api(status, &error_text));
        }

        let chat_response: ChatResponse = response.json().await?;

        if let Some(usage) = &chat_response.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "OpenAI token usage"
            );
        }

        let choice = chat_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AiError::Parse("No choices in OpenAI response".to_string()))?;

        if let Some(refusal) = choice.message.refusal {
            return Err(AiError::Parse(format!("Model refused structured output: {refusal}")));
        }

        choice.message.content.ok_or_else(|| {
            AiError::Parse(format!(
                "No content in OpenAI response (finish_reason: {})",
                choice.finish_reason.as_deref().unwrap_or("unknown")
            ))
        })
    }
}
