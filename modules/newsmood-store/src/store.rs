// Postgres persistence for headline analyses and the unannotated backlog.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::{debug, info, warn};

use newsmood_common::{AnalysisRecord, BacklogArticle, TagCatalog, TagVocabulary};

use crate::error::Result;

/// Result of inserting a sentiment row. A second insert for the same
/// article is not an error: it reports `AlreadyExists`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted(i64),
    AlreadyExists,
}

/// Column values for one `news_article_sentiments` row.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAnalysis {
    pub news_article_id: i64,
    pub sentiment_label: String,
    pub sentiment_confidence: i16,
    pub clickbait_level: i16,
    pub version_info: serde_json::Value,
}

impl NewAnalysis {
    pub fn from_record(record: &AnalysisRecord) -> Self {
        Self {
            news_article_id: record.article_id,
            sentiment_label: record.sentiment.result.sentiment.to_string(),
            sentiment_confidence: i16::from(record.sentiment.result.confidence),
            clickbait_level: record.clickbait.result.score.value(),
            version_info: record.version_info(),
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct BacklogRow {
    id: i64,
    title: String,
    description: Option<String>,
}

/// Tag table, association table and association foreign-key column of a catalog.
fn catalog_tables(catalog: TagCatalog) -> (&'static str, &'static str, &'static str) {
    match catalog {
        TagCatalog::Category => ("category_tags", "news_article_tags", "category_tag_id"),
        TagCatalog::EmotionalImpact => (
            "emotional_impact_tags",
            "news_article_emotional_impact",
            "emotional_impact_tag_id",
        ),
    }
}

/// Primary first, then secondaries, without repeats. A secondary equal to
/// the primary is dropped so the primary row keeps `is_primary = true`.
fn association_rows<'a>(primary_tag: &'a str, secondary_tags: &'a [String]) -> Vec<(&'a str, bool)> {
    let mut rows: Vec<(&str, bool)> = vec![(primary_tag, true)];
    for tag in secondary_tags {
        if !rows.iter().any(|(name, _)| *name == tag.as_str()) {
            rows.push((tag.as_str(), false));
        }
    }
    rows
}

#[derive(Clone)]
pub struct PgAnalysisStore {
    pool: PgPool,
}

impl PgAnalysisStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(4)
            .connect(database_url)
            .await?;
        info!("Connected to database");
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Run the embedded SQL migrations.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Visible articles created after `created_after` with no sentiment row,
    /// newest first.
    pub async fn fetch_unannotated(
        &self,
        limit: usize,
        created_after: DateTime<Utc>,
    ) -> Result<Vec<BacklogArticle>> {
        let rows = sqlx::query_as::<_, BacklogRow>(
            r#"
            SELECT a.id, a.title, a.description
            FROM news_articles a
            WHERE a.created_at > $1
              AND NOT a.is_hidden
              AND NOT EXISTS (
                  SELECT 1 FROM news_article_sentiments s
                  WHERE s.news_article_id = a.id
              )
            ORDER BY a.created_at DESC
            LIMIT $2
            "#,
        )
        .bind(created_after)
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Fetched unannotated articles");

        Ok(rows
            .into_iter()
            .map(|r| BacklogArticle {
                id: r.id,
                title: r.title,
                description: r.description,
            })
            .collect())
    }

    /// Open a write transaction for one analysis. Dropping it without
    /// `commit` rolls back everything written through it.
    pub async fn begin(&self) -> Result<AnalysisTransaction> {
        Ok(AnalysisTransaction {
            tx: self.pool.begin().await?,
        })
    }

    /// Upsert every vocabulary name into its catalog table. Returns the
    /// number of names that were new.
    pub async fn seed_tag_catalog(&self, vocabulary: &TagVocabulary) -> Result<u64> {
        let (tag_table, _, _) = catalog_tables(vocabulary.catalog());
        let names: Vec<&str> = vocabulary.names().collect();

        let result = sqlx::query(&format!(
            "INSERT INTO {tag_table} (tag_name) SELECT * FROM UNNEST($1::text[]) \
             ON CONFLICT (tag_name) DO NOTHING"
        ))
        .bind(&names)
        .execute(&self.pool)
        .await?;

        info!(
            catalog = %vocabulary.catalog(),
            total = names.len(),
            added = result.rows_affected(),
            "Seeded tag catalog"
        );
        Ok(result.rows_affected())
    }
}

/// The sentiment row and both tag association sets of one article,
/// written in a single transaction.
pub struct AnalysisTransaction {
    tx: Transaction<'static, Postgres>,
}

impl AnalysisTransaction {
    /// Insert the sentiment row for one article, or report that it exists.
    pub async fn insert_analysis(&mut self, analysis: &NewAnalysis) -> Result<InsertOutcome> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO news_article_sentiments
                (news_article_id, sentiment_label, sentiment_confidence,
                 clickbait_level, version_info)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (news_article_id) DO NOTHING
            RETURNING id
            "#,
        )
        .bind(analysis.news_article_id)
        .bind(&analysis.sentiment_label)
        .bind(analysis.sentiment_confidence)
        .bind(analysis.clickbait_level)
        .bind(&analysis.version_info)
        .fetch_optional(&mut *self.tx)
        .await?;

        Ok(match id {
            Some(id) => InsertOutcome::Inserted(id),
            None => InsertOutcome::AlreadyExists,
        })
    }

    /// Link a sentiment row to its primary and secondary tags. Names with no
    /// row in the catalog's table are skipped. Returns the rows inserted.
    pub async fn insert_tag_associations(
        &mut self,
        record_id: i64,
        primary_tag: &str,
        secondary_tags: &[String],
        catalog: TagCatalog,
    ) -> Result<u64> {
        let (tag_table, assoc_table, fk_column) = catalog_tables(catalog);
        let rows = association_rows(primary_tag, secondary_tags);
        let names: Vec<&str> = rows.iter().map(|(name, _)| *name).collect();

        let ids: HashMap<String, i32> = sqlx::query_as::<_, (i32, String)>(&format!(
            "SELECT id, tag_name FROM {tag_table} WHERE tag_name = ANY($1)"
        ))
        .bind(&names)
        .fetch_all(&mut *self.tx)
        .await?
        .into_iter()
        .map(|(id, name)| (name, id))
        .collect();

        let insert = format!(
            "INSERT INTO {assoc_table} (news_article_sentiment_id, {fk_column}, is_primary) \
             VALUES ($1, $2, $3) ON CONFLICT DO NOTHING"
        );

        let mut inserted = 0;
        for (name, is_primary) in rows {
            let Some(tag_id) = ids.get(name) else {
                warn!(record_id, tag = name, %catalog, "Tag not in catalog table, skipping");
                continue;
            };
            inserted += sqlx::query(&insert)
                .bind(record_id)
                .bind(tag_id)
                .bind(is_primary)
                .execute(&mut *self.tx)
                .await?
                .rows_affected();
        }

        Ok(inserted)
    }

    pub async fn commit(self) -> Result<()> {
        self.tx.commit().await?;
        Ok(())
    }
}
