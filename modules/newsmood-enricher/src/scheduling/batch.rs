use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::time::Instant;
use tracing::{error, info, warn};
use typed_builder::TypedBuilder;

use newsmood_common::{BatchConfig, EnrichError, EnrichResult, HeadlineInput};

use super::{BatchReport, SlidingWindowLimiter};
use crate::pipeline::{PipelineExecutor, PipelineFailure, PipelineOutcome, PipelineStep};
use crate::traits::BacklogSource;

/// Limits of one batch run.
#[derive(Debug, Clone, TypedBuilder)]
pub struct BatchSettings {
    #[builder(default = 100)]
    pub max_articles: usize,
    /// Checked between articles; a run may overshoot by one pipeline.
    #[builder(default = Duration::from_secs(8 * 60 * 60))]
    pub max_duration: Duration,
    /// Dispatches per window. 0 = unthrottled.
    #[builder(default = 7)]
    pub window_size: usize,
    #[builder(default = Duration::from_secs(60))]
    pub window_duration: Duration,
    #[builder(default = BatchConfig::default().created_after)]
    pub created_after: DateTime<Utc>,
}

impl BatchSettings {
    pub fn from_config(config: &BatchConfig) -> EnrichResult<Self> {
        let max_duration = Duration::try_from_secs_f64(config.max_duration_hours * 3600.0)
            .map_err(|e| {
                EnrichError::Configuration(format!(
                    "invalid max_duration_hours {}: {e}",
                    config.max_duration_hours
                ))
            })?;
        let window_duration = Duration::try_from_secs_f64(config.window_seconds).map_err(|e| {
            EnrichError::Configuration(format!(
                "invalid window_seconds {}: {e}",
                config.window_seconds
            ))
        })?;
        Ok(Self {
            max_articles: config.max_articles,
            max_duration,
            window_size: config.window_size,
            window_duration,
            created_after: config.created_after,
        })
    }
}

/// Drains the unannotated backlog through the pipeline, one article at a
/// time, under a duration budget and a dispatch rate limit.
pub struct BatchScheduler {
    backlog: Arc<dyn BacklogSource>,
    pipeline: PipelineExecutor,
}

impl BatchScheduler {
    pub fn new(backlog: Arc<dyn BacklogSource>, pipeline: PipelineExecutor) -> Self {
        Self { backlog, pipeline }
    }

    /// A backlog fetch failure or a configuration error aborts the run.
    /// Every other per-article failure is logged and tallied.
    pub async fn run_batch(&self, settings: &BatchSettings) -> EnrichResult<BatchReport> {
        let started = Instant::now();

        let articles = self
            .backlog
            .fetch_unannotated(settings.max_articles, settings.created_after)
            .await?;

        info!(
            fetched = articles.len(),
            max_articles = settings.max_articles,
            window_size = settings.window_size,
            window_secs = settings.window_duration.as_secs_f64(),
            "Starting batch"
        );

        let mut limiter = SlidingWindowLimiter::new(settings.window_size, settings.window_duration);
        let mut report = BatchReport {
            fetched: articles.len(),
            ..Default::default()
        };

        for article in articles.into_iter().take(settings.max_articles) {
            if started.elapsed() > settings.max_duration {
                warn!(
                    elapsed_secs = started.elapsed().as_secs(),
                    processed = report.total,
                    "Duration budget exhausted, stopping batch"
                );
                report.stopped_early = true;
                break;
            }

            report.total += 1;
            let article_id = article.id;

            let input = match HeadlineInput::try_from(article) {
                Ok(input) => input,
                Err(error) => {
                    record_failure(
                        &mut report,
                        PipelineFailure::new(article_id, PipelineStep::Input, error),
                    )?;
                    continue;
                }
            };

            let waited = limiter.acquire().await;
            if !waited.is_zero() {
                info!(
                    article_id,
                    wait_secs = waited.as_secs_f64(),
                    "Rate limit window full, waited"
                );
            }

            match self.pipeline.run(&input).await {
                Ok(PipelineOutcome::Persisted { .. }) => report.successful += 1,
                Ok(PipelineOutcome::AlreadyAnalyzed) => {
                    report.successful += 1;
                    report.already_analyzed += 1;
                }
                Err(failure) => record_failure(&mut report, failure)?,
            }
        }

        report.duration = started.elapsed();
        info!(
            total = report.total,
            successful = report.successful,
            failed = report.failed,
            duration_secs = report.duration.as_secs(),
            "Batch finished"
        );
        Ok(report)
    }
}

fn record_failure(report: &mut BatchReport, failure: PipelineFailure) -> EnrichResult<()> {
    if failure.error.is_fatal() {
        error!(
            article_id = failure.article_id,
            step = %failure.step,
            error = %failure.error,
            "Fatal error, aborting batch"
        );
        return Err(failure.error);
    }
    warn!(
        article_id = failure.article_id,
        step = %failure.step,
        error = %failure.error,
        "Article failed"
    );
    report.failed += 1;
    Ok(())
}
