//! In-memory doubles for the pipeline ports, plus fixture helpers.
//!
//! Compiled for unit tests and, through the `test-support` feature, for the
//! scenario tests under `tests/`.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;

use newsmood_common::prompt_registry::allowed_runtime_vars;
use newsmood_common::{
    BacklogArticle, ClickbaitResult, ClickbaitScore, EnrichError, EnrichResult, HeadlineInput,
    PromptTemplate, SentimentLabel, SentimentResult, Stage, StageAnalysis, StagePrompt,
    StageProvenance, StageResult, TagCatalog, TagResult,
};
use newsmood_store::{InsertOutcome, NewAnalysis};

use crate::analyzers::{AnalyzerSet, StageAnalyzer};
use crate::traits::{AnalysisStore, AnalysisWrite, BacklogSource, ModelRequest, StructuredModel};

// ---------------------------------------------------------------------------
// MockModel
// ---------------------------------------------------------------------------

/// One recorded `invoke` call.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub model: String,
    pub prompt: String,
    pub schema_name: String,
    pub temperature: f32,
}

/// Canned structured responses keyed by schema name, optionally narrowed to
/// one model. Unregistered schemas fail with a provider error.
/// Builder pattern: `.on_schema()`, `.on_model()`, `.fail_on()`.
pub struct MockModel {
    by_schema: HashMap<String, Result<Value, String>>,
    by_model: HashMap<(String, String), Result<Value, String>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockModel {
    pub fn new() -> Self {
        Self {
            by_schema: HashMap::new(),
            by_model: HashMap::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn on_schema(mut self, schema_name: &str, response: Value) -> Self {
        self.by_schema.insert(schema_name.to_string(), Ok(response));
        self
    }

    /// Takes precedence over `on_schema` for requests to `model`.
    pub fn on_model(mut self, model: &str, schema_name: &str, response: Value) -> Self {
        self.by_model
            .insert((model.to_string(), schema_name.to_string()), Ok(response));
        self
    }

    pub fn fail_on(mut self, schema_name: &str, message: &str) -> Self {
        self.by_schema
            .insert(schema_name.to_string(), Err(message.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.prompt).collect()
    }
}

impl Default for MockModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StructuredModel for MockModel {
    async fn invoke(&self, request: ModelRequest<'_>) -> EnrichResult<Value> {
        self.requests.lock().unwrap().push(RecordedRequest {
            model: request.model.to_string(),
            prompt: request.prompt.to_string(),
            schema_name: request.schema_name.to_string(),
            temperature: request.temperature,
        });

        let key = (request.model.to_string(), request.schema_name.to_string());
        let response = self
            .by_model
            .get(&key)
            .or_else(|| self.by_schema.get(request.schema_name));

        match response {
            Some(Ok(value)) => Ok(value.clone()),
            Some(Err(message)) => Err(EnrichError::Provider(message.clone())),
            None => Err(EnrichError::Provider(format!(
                "no mock response for {} from {}",
                request.schema_name, request.model
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// MockAnalyzer
// ---------------------------------------------------------------------------

/// Returns a fixed result (or error) for every headline and counts calls.
pub struct MockAnalyzer {
    stage: Stage,
    outcome: Result<StageResult, (fn(String) -> EnrichError, String)>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl MockAnalyzer {
    pub fn returning(result: StageResult) -> Self {
        Self {
            stage: result.stage(),
            outcome: Ok(result),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Fails every call with a provider error.
    pub fn failing(stage: Stage, message: &str) -> Self {
        Self::failing_with(stage, EnrichError::Provider, message)
    }

    /// Fails every call with `kind`, e.g. `EnrichError::Configuration`.
    pub fn failing_with(stage: Stage, kind: fn(String) -> EnrichError, message: &str) -> Self {
        Self {
            stage,
            outcome: Err((kind, message.to_string())),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Sleep on the tokio clock before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StageAnalyzer for MockAnalyzer {
    fn stage(&self) -> Stage {
        self.stage
    }

    async fn analyze(&self, _input: &HeadlineInput) -> EnrichResult<StageAnalysis> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.outcome {
            Ok(result) => Ok(StageAnalysis {
                result: result.clone(),
                provenance: provenance("openai/gpt-4o"),
            }),
            Err((kind, message)) => Err(kind(message.clone())),
        }
    }
}

// ---------------------------------------------------------------------------
// MockStore
// ---------------------------------------------------------------------------

/// One recorded `insert_tag_associations` call.
#[derive(Debug, Clone, PartialEq)]
pub struct TagCall {
    pub record_id: i64,
    pub primary_tag: String,
    pub secondary_tags: Vec<String>,
    pub catalog: TagCatalog,
}

/// In-memory persistence gateway. Writes are buffered per `begin` and only
/// land on `commit`. Articles registered with `.with_existing()` (or
/// committed earlier) yield `AlreadyExists`.
pub struct MockStore {
    inner: Arc<Mutex<MockStoreInner>>,
}

struct MockStoreInner {
    analyses: Vec<NewAnalysis>,
    tag_calls: Vec<TagCall>,
    existing: HashSet<i64>,
    failure: Option<String>,
    tag_failure: Option<(TagCatalog, String)>,
    next_id: i64,
}

impl MockStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(MockStoreInner {
                analyses: Vec::new(),
                tag_calls: Vec::new(),
                existing: HashSet::new(),
                failure: None,
                tag_failure: None,
                next_id: 1,
            })),
        }
    }

    pub fn with_existing(self, article_id: i64) -> Self {
        self.inner.lock().unwrap().existing.insert(article_id);
        self
    }

    /// Make every write return a persistence error.
    pub fn failing(self, message: &str) -> Self {
        self.inner.lock().unwrap().failure = Some(message.to_string());
        self
    }

    /// Fail the next association write for `catalog`, then recover.
    pub fn failing_tags_once(self, catalog: TagCatalog, message: &str) -> Self {
        self.inner.lock().unwrap().tag_failure = Some((catalog, message.to_string()));
        self
    }

    /// Committed sentiment rows.
    pub fn analyses(&self) -> Vec<NewAnalysis> {
        self.inner.lock().unwrap().analyses.clone()
    }

    /// Committed association writes.
    pub fn tag_calls(&self) -> Vec<TagCall> {
        self.inner.lock().unwrap().tag_calls.clone()
    }
}

impl Default for MockStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalysisStore for MockStore {
    async fn begin(&self) -> EnrichResult<Box<dyn AnalysisWrite>> {
        if let Some(message) = &self.inner.lock().unwrap().failure {
            return Err(EnrichError::Persistence(message.clone()));
        }
        Ok(Box::new(MockWrite {
            inner: self.inner.clone(),
            analysis: None,
            tag_calls: Vec::new(),
        }))
    }
}

struct MockWrite {
    inner: Arc<Mutex<MockStoreInner>>,
    analysis: Option<NewAnalysis>,
    tag_calls: Vec<TagCall>,
}

#[async_trait]
impl AnalysisWrite for MockWrite {
    async fn insert_analysis(&mut self, analysis: &NewAnalysis) -> EnrichResult<InsertOutcome> {
        let mut inner = self.inner.lock().unwrap();
        if inner.existing.contains(&analysis.news_article_id) {
            return Ok(InsertOutcome::AlreadyExists);
        }
        let id = inner.next_id;
        inner.next_id += 1;
        self.analysis = Some(analysis.clone());
        Ok(InsertOutcome::Inserted(id))
    }

    async fn insert_tag_associations(
        &mut self,
        record_id: i64,
        primary_tag: &str,
        secondary_tags: &[String],
        catalog: TagCatalog,
    ) -> EnrichResult<()> {
        let mut inner = self.inner.lock().unwrap();
        if inner.tag_failure.as_ref().is_some_and(|(c, _)| *c == catalog) {
            if let Some((_, message)) = inner.tag_failure.take() {
                return Err(EnrichError::Persistence(message));
            }
        }
        self.tag_calls.push(TagCall {
            record_id,
            primary_tag: primary_tag.to_string(),
            secondary_tags: secondary_tags.to_vec(),
            catalog,
        });
        Ok(())
    }

    async fn commit(self: Box<Self>) -> EnrichResult<()> {
        let MockWrite {
            inner,
            analysis,
            tag_calls,
        } = *self;
        let mut inner = inner.lock().unwrap();
        if let Some(analysis) = analysis {
            inner.existing.insert(analysis.news_article_id);
            inner.analyses.push(analysis);
        }
        inner.tag_calls.extend(tag_calls);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// MockBacklog
// ---------------------------------------------------------------------------

/// Serves a fixed list of articles, truncated to the requested limit.
pub struct MockBacklog {
    articles: Vec<BacklogArticle>,
    failure: Option<String>,
    fetches: AtomicUsize,
}

impl MockBacklog {
    pub fn new(articles: Vec<BacklogArticle>) -> Self {
        Self {
            articles,
            failure: None,
            fetches: AtomicUsize::new(0),
        }
    }

    /// Every fetch fails with a fetch error.
    pub fn failing(message: &str) -> Self {
        Self {
            articles: Vec::new(),
            failure: Some(message.to_string()),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BacklogSource for MockBacklog {
    async fn fetch_unannotated(
        &self,
        limit: usize,
        _created_after: DateTime<Utc>,
    ) -> EnrichResult<Vec<BacklogArticle>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.failure {
            return Err(EnrichError::Fetch(message.clone()));
        }
        Ok(self.articles.iter().take(limit).cloned().collect())
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A stage prompt parsed from `source` with no config values.
pub fn stage_prompt(stage: Stage, source: &str, model: &str) -> StagePrompt {
    let template = PromptTemplate::parse(
        source,
        &toml::Value::Table(Default::default()),
        allowed_runtime_vars(stage),
    )
    .unwrap();
    StagePrompt {
        stage,
        version: 1,
        path: "prompts/test.txt".to_string(),
        model: model.to_string(),
        temperature: 1.0,
        template,
    }
}

pub fn provenance(model: &str) -> StageProvenance {
    StageProvenance {
        prompt_version: 1,
        path: "prompts/test.txt".to_string(),
        model: model.to_string(),
        temperature: 1.0,
    }
}

pub fn article(id: i64, title: &str) -> BacklogArticle {
    BacklogArticle {
        id,
        title: title.to_string(),
        description: None,
    }
}

/// `count` articles with ids `1..=count`.
pub fn articles(count: usize) -> Vec<BacklogArticle> {
    (1..=count as i64)
        .map(|id| article(id, &format!("Headline number {id}")))
        .collect()
}

/// Analyzers that succeed for every headline: Negative/80, banking with a
/// taxation secondary, anxiety, clickbait 2.
pub fn happy_analyzers() -> AnalyzerSet {
    happy_analyzers_with_delay(Duration::ZERO)
}

/// Like [`happy_analyzers`], but the sentiment stage takes `delay`.
pub fn happy_analyzers_with_delay(delay: Duration) -> AnalyzerSet {
    let mut sentiment = MockAnalyzer::returning(StageResult::Sentiment(SentimentResult {
        sentiment: SentimentLabel::Negative,
        confidence: 80,
    }));
    if !delay.is_zero() {
        sentiment = sentiment.with_delay(delay);
    }
    AnalyzerSet::new(
        Arc::new(sentiment),
        Arc::new(MockAnalyzer::returning(StageResult::Category(TagResult {
            primary_tag: "Banking & Financial Services".to_string(),
            secondary_tags: vec!["Taxation Policy".to_string()],
        }))),
        Arc::new(MockAnalyzer::returning(StageResult::EmotionalImpact(
            TagResult {
                primary_tag: "Anxiety / Fear".to_string(),
                secondary_tags: vec![],
            },
        ))),
        Arc::new(MockAnalyzer::returning(StageResult::Clickbait(
            ClickbaitResult {
                score: ClickbaitScore::Two,
            },
        ))),
    )
    .unwrap()
}
