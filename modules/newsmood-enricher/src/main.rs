use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use newsmood_common::file_config::load_config;
use newsmood_common::{AppConfig, FileConfig, HeadlineInput, PromptRegistry, TagCatalog, TagVocabulary};
use newsmood_enricher::{
    build_analyzers, AnalyzerSet, BatchScheduler, BatchSettings, ModelRouter, PipelineExecutor,
};
use newsmood_store::PgAnalysisStore;

#[derive(Parser)]
#[command(name = "newsmood", about = "Headline sentiment, topic and clickbait enrichment")]
struct Cli {
    /// Path to config TOML file
    #[arg(long, default_value = "./config/newsmood.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Enrich one batch of unannotated articles and print the report
    Run {
        #[arg(long)]
        max_articles: Option<usize>,
        #[arg(long)]
        max_duration_hours: Option<f64>,
        /// Dispatches per window; 0 disables throttling
        #[arg(long)]
        window_size: Option<usize>,
        #[arg(long)]
        window_seconds: Option<f64>,
    },
    /// Analyze a single headline without writing anything
    Analyze {
        #[arg(long)]
        headline: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Apply database migrations
    Migrate,
    /// Sync both tag vocabularies into their catalog tables
    SeedTags,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;

    let cli = Cli::parse();
    let config = AppConfig::from_env()?;

    match cli.command {
        Command::Run {
            max_articles,
            max_duration_hours,
            window_size,
            window_seconds,
        } => {
            let (file_config, analyzers) = load_analyzers(&cli.config, &config)?;

            let mut batch = file_config.batch.clone();
            if let Some(n) = max_articles {
                batch.max_articles = n;
            }
            if let Some(h) = max_duration_hours {
                batch.max_duration_hours = h;
            }
            if let Some(n) = window_size {
                batch.window_size = n;
            }
            if let Some(s) = window_seconds {
                batch.window_seconds = s;
            }
            let settings = BatchSettings::from_config(&batch)?;

            let store = connect(&config).await?;
            let scheduler = BatchScheduler::new(
                store.clone(),
                PipelineExecutor::new(analyzers, store),
            );

            let report = scheduler.run_batch(&settings).await?;
            println!("{report}");
        }
        Command::Analyze {
            headline,
            description,
        } => {
            let (_, analyzers) = load_analyzers(&cli.config, &config)?;
            let input = HeadlineInput::new(1, headline, description)?;

            let record = analyzers.analyze(&input).await?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Command::Migrate => {
            let store = connect(&config).await?;
            store.migrate().await.context("Failed to run migrations")?;
            info!("Migrations applied");
        }
        Command::SeedTags => {
            let store = connect(&config).await?;
            for catalog in [TagCatalog::Category, TagCatalog::EmotionalImpact] {
                let vocabulary = TagVocabulary::new(catalog);
                let inserted = store
                    .seed_tag_catalog(&vocabulary)
                    .await
                    .with_context(|| format!("Failed to seed {catalog} tags"))?;
                info!(%catalog, total = vocabulary.len(), inserted, "Tag catalog seeded");
            }
        }
    }

    Ok(())
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("newsmood=info,ai_client=info"))?;
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
    Ok(())
}

/// Load the TOML config and prompt set, then build the analyzers and the
/// provider clients they need.
fn load_analyzers(config_path: &Path, config: &AppConfig) -> Result<(FileConfig, AnalyzerSet)> {
    let config_path = config_path.canonicalize().with_context(|| {
        format!(
            "Config file not found: {}. Create one or specify --config <path>",
            config_path.display()
        )
    })?;
    let config_dir = config_path
        .parent()
        .context("config file must have a parent directory")?;

    info!(config = %config_path.display(), "Loading config");
    let (file_config, toml_value) = load_config(&config_path)?;

    let prompts = PromptRegistry::load(
        &file_config,
        config.prompt_config_version,
        config_dir,
        &toml_value,
    )?;
    info!(version = prompts.version(), "Prompt templates loaded and validated");

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(120))
        .build()
        .context("Failed to build HTTP client")?;
    let router = ModelRouter::new(prompts.models(), config, http)?;

    let analyzers = build_analyzers(&prompts, Arc::new(router))?;
    Ok((file_config, analyzers))
}

async fn connect(config: &AppConfig) -> Result<Arc<PgAnalysisStore>> {
    let url = config.require_database_url()?;
    let store = PgAnalysisStore::connect(url)
        .await
        .context("Failed to connect to Postgres")?;
    Ok(Arc::new(store))
}
