use thiserror::Error;

use crate::util::truncate_to_char_boundary;

/// Longest slice of a provider error body kept in an [`AiError::Api`].
const MAX_ERROR_BODY_BYTES: usize = 2_000;

pub type Result<T> = std::result::Result<T, AiError>;

#[derive(Debug, Error)]
pub enum AiError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The provider answered, but not with the structured payload we asked for.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl AiError {
    pub(crate) fn api(status: reqwest::StatusCode, body: &str) -> Self {
        AiError::Api {
            status: status.as_u16(),
            body: truncate_to_char_boundary(body, MAX_ERROR_BODY_BYTES).to_string(),
        }
    }

    /// Rate-limit and overload responses. Callers decide whether to back off.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, AiError::Api { status: 429 | 529, .. })
    }
}

impl From<reqwest::Error> for AiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            AiError::Parse(e.to_string())
        } else {
            AiError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for AiError {
    fn from(e: serde_json::Error) -> Self {
        AiError::Parse(e.to_string())
    }
}

impl From<reqwest::header::InvalidHeaderValue> for AiError {
    fn from(e: reqwest::header::InvalidHeaderValue) -> Self {
        AiError::Config(format!("invalid header value: {e}"))
    }
}
