pub mod config;
pub mod error;
pub mod file_config;
pub mod prompt_registry;
pub mod template;
pub mod types;
pub mod vocabulary;

pub use config::AppConfig;
pub use error::{EnrichError, EnrichResult};
pub use file_config::{BatchConfig, FileConfig, PromptSetConfig, StagePromptConfig};
pub use prompt_registry::{PromptRegistry, StagePrompt};
pub use template::{PromptTemplate, TemplateError};
pub use types::*;
pub use vocabulary::{TagCatalog, TagDefinition, TagVocabulary};
