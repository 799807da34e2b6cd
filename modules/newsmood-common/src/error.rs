use thiserror::Error;

/// Failure taxonomy shared by the analyzers, the pipeline and the scheduler.
///
/// `Configuration` and `Fetch` are fatal to a batch run. Everything else
/// aborts the current article only and is tallied as a failure.
#[derive(Error, Debug)]
pub enum EnrichError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Schema validation error: {0}")]
    SchemaValidation(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl EnrichError {
    /// Whether this error must stop the whole batch rather than one article.
    pub fn is_fatal(&self) -> bool {
        matches!(self, EnrichError::Configuration(_) | EnrichError::Fetch(_))
    }
}

pub type EnrichResult<T> = std::result::Result<T, EnrichError>;
