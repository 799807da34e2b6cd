// Trait boundaries of the enrichment pipeline.
//
// StructuredModel: one schema-constrained completion, provider-agnostic.
// BacklogSource: the unannotated-article query.
// AnalysisStore: the sentiment + tag association writes, in one transaction.
//
// Production implementations live here (Postgres) and in provider.rs
// (ModelRouter). testing.rs has in-memory mocks for all three.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use newsmood_common::{BacklogArticle, EnrichError, EnrichResult, TagCatalog};
use newsmood_store::{AnalysisTransaction, InsertOutcome, NewAnalysis, PgAnalysisStore};

// ---------------------------------------------------------------------------
// StructuredModel
// ---------------------------------------------------------------------------

/// One schema-constrained model call.
#[derive(Debug, Clone, Copy)]
pub struct ModelRequest<'a> {
    /// `provider/model` identifier.
    pub model: &'a str,
    pub prompt: &'a str,
    pub schema_name: &'a str,
    pub schema: &'a serde_json::Value,
    pub temperature: f32,
}

#[async_trait]
pub trait StructuredModel: Send + Sync {
    /// Submit the prompt and return the structured JSON value.
    /// Failures surface as `Provider` or `SchemaValidation`.
    async fn invoke(&self, request: ModelRequest<'_>) -> EnrichResult<serde_json::Value>;
}

// ---------------------------------------------------------------------------
// BacklogSource
// ---------------------------------------------------------------------------

#[async_trait]
pub trait BacklogSource: Send + Sync {
    /// Up to `limit` articles without an analysis, newest first.
    async fn fetch_unannotated(
        &self,
        limit: usize,
        created_after: DateTime<Utc>,
    ) -> EnrichResult<Vec<BacklogArticle>>;
}

#[async_trait]
impl BacklogSource for PgAnalysisStore {
    async fn fetch_unannotated(
        &self,
        limit: usize,
        created_after: DateTime<Utc>,
    ) -> EnrichResult<Vec<BacklogArticle>> {
        PgAnalysisStore::fetch_unannotated(self, limit, created_after)
            .await
            .map_err(|e| EnrichError::Fetch(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// AnalysisStore
// ---------------------------------------------------------------------------

#[async_trait]
pub trait AnalysisStore: Send + Sync {
    /// Start the writes for one article. Nothing is visible until `commit`.
    async fn begin(&self) -> EnrichResult<Box<dyn AnalysisWrite>>;
}

/// One article's sentiment row and tag associations, committed together.
/// Dropping without `commit` discards every write.
#[async_trait]
pub trait AnalysisWrite: Send {
    /// Insert the sentiment row; a duplicate article yields `AlreadyExists`.
    async fn insert_analysis(&mut self, analysis: &NewAnalysis) -> EnrichResult<InsertOutcome>;

    /// Link the record to its primary and secondary tags in `catalog`.
    async fn insert_tag_associations(
        &mut self,
        record_id: i64,
        primary_tag: &str,
        secondary_tags: &[String],
        catalog: TagCatalog,
    ) -> EnrichResult<()>;

    async fn commit(self: Box<Self>) -> EnrichResult<()>;
}

#[async_trait]
impl AnalysisStore for PgAnalysisStore {
    async fn begin(&self) -> EnrichResult<Box<dyn AnalysisWrite>> {
        Ok(Box::new(PgAnalysisStore::begin(self).await?))
    }
}

#[async_trait]
impl AnalysisWrite for AnalysisTransaction {
    async fn insert_analysis(&mut self, analysis: &NewAnalysis) -> EnrichResult<InsertOutcome> {
        Ok(AnalysisTransaction::insert_analysis(self, analysis).await?)
    }

    async fn insert_tag_associations(
        &mut self,
        record_id: i64,
        primary_tag: &str,
        secondary_tags: &[String],
        catalog: TagCatalog,
    ) -> EnrichResult<()> {
        AnalysisTransaction::insert_tag_associations(
            self,
            record_id,
            primary_tag,
            secondary_tags,
            catalog,
        )
        .await?;
        Ok(())
    }

    async fn commit(self: Box<Self>) -> EnrichResult<()> {
        Ok(AnalysisTransaction::commit(*self).await?)
    }
}
