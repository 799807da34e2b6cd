//! Gateway behavior against a throwaway Postgres container.
//! Needs a local Docker daemon.

mod harness;

use chrono::{Duration, Utc};
use newsmood_common::{TagCatalog, TagVocabulary};
use newsmood_store::{InsertOutcome, NewAnalysis, PgAnalysisStore};

use harness::TestDb;

async fn insert_article(store: &PgAnalysisStore, title: &str, hidden: bool) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO news_articles (title, url, is_hidden) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(title)
    .bind(format!("https://news.example/{}", title.replace(' ', "-")))
    .bind(hidden)
    .fetch_one(store.pool())
    .await
    .unwrap()
}

fn analysis(article_id: i64) -> NewAnalysis {
    NewAnalysis {
        news_article_id: article_id,
        sentiment_label: "Negative".to_string(),
        sentiment_confidence: 80,
        clickbait_level: 2,
        version_info: serde_json::json!({
            "sentiment": {"version": 1, "path": "prompts/headline-sentiment-v1.txt",
                          "model": "openai/gpt-4o", "temperature": 1.0}
        }),
    }
}

async fn seed(store: &PgAnalysisStore) {
    for catalog in [TagCatalog::Category, TagCatalog::EmotionalImpact] {
        store
            .seed_tag_catalog(&TagVocabulary::new(catalog))
            .await
            .unwrap();
    }
}

async fn count(store: &PgAnalysisStore, sql: &str, id: i64) -> i64 {
    sqlx::query_scalar::<_, i64>(sql)
        .bind(id)
        .fetch_one(store.pool())
        .await
        .unwrap()
}

#[tokio::test]
async fn backlog_excludes_hidden_old_and_analyzed_articles() {
    let db = TestDb::start().await;
    let store = db.store();
    let visible = insert_article(store, "Bank raises interest rates again", false).await;
    let hidden = insert_article(store, "Hidden story", true).await;
    let old = insert_article(store, "Last year's flood recap", false).await;
    sqlx::query("UPDATE news_articles SET created_at = now() - interval '30 days' WHERE id = $1")
        .bind(old)
        .execute(store.pool())
        .await
        .unwrap();

    let since = Utc::now() - Duration::days(1);
    let backlog = store.fetch_unannotated(500, since).await.unwrap();
    let ids: Vec<i64> = backlog.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![visible]);

    let mut tx = store.begin().await.unwrap();
    tx.insert_analysis(&analysis(visible)).await.unwrap();
    tx.commit().await.unwrap();

    assert!(store.fetch_unannotated(500, since).await.unwrap().is_empty());
}

#[tokio::test]
async fn backlog_is_newest_first_and_limited() {
    let db = TestDb::start().await;
    let store = db.store();
    for (title, age) in [("Oldest", 3), ("Middle", 2), ("Newest", 1)] {
        let id = insert_article(store, title, false).await;
        sqlx::query("UPDATE news_articles SET created_at = now() - make_interval(hours => $2) WHERE id = $1")
            .bind(id)
            .bind(age)
            .execute(store.pool())
            .await
            .unwrap();
    }

    let backlog = store
        .fetch_unannotated(2, Utc::now() - Duration::days(1))
        .await
        .unwrap();
    let titles: Vec<&str> = backlog.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["Newest", "Middle"]);
}

#[tokio::test]
async fn second_insert_reports_already_exists() {
    let db = TestDb::start().await;
    let store = db.store();
    let article = insert_article(store, "Storm closes schools", false).await;

    let mut tx = store.begin().await.unwrap();
    let first = tx.insert_analysis(&analysis(article)).await.unwrap();
    tx.commit().await.unwrap();
    assert!(matches!(first, InsertOutcome::Inserted(_)));

    let mut tx = store.begin().await.unwrap();
    let second = tx.insert_analysis(&analysis(article)).await.unwrap();
    assert_eq!(second, InsertOutcome::AlreadyExists);
}

#[tokio::test]
async fn associations_skip_names_missing_from_catalog() {
    let db = TestDb::start().await;
    let store = db.store();
    seed(store).await;
    let article = insert_article(store, "Central bank hikes again", false).await;

    let mut tx = store.begin().await.unwrap();
    let InsertOutcome::Inserted(record_id) = tx.insert_analysis(&analysis(article)).await.unwrap()
    else {
        panic!("expected a fresh insert");
    };
    let inserted = tx
        .insert_tag_associations(
            record_id,
            "Banking & Financial Services",
            &["Taxation Policy".to_string(), "Not A Real Tag".to_string()],
            TagCatalog::Category,
        )
        .await
        .unwrap();
    tx.commit().await.unwrap();
    assert_eq!(inserted, 2);

    let primary: bool = sqlx::query_scalar(
        "SELECT t.is_primary FROM news_article_tags t
         JOIN category_tags c ON c.id = t.category_tag_id
         WHERE t.news_article_sentiment_id = $1 AND c.tag_name = $2",
    )
    .bind(record_id)
    .bind("Banking & Financial Services")
    .fetch_one(store.pool())
    .await
    .unwrap();
    assert!(primary);
}

#[tokio::test]
async fn uncommitted_writes_roll_back_together() {
    let db = TestDb::start().await;
    let store = db.store();
    seed(store).await;
    let article = insert_article(store, "Strike halts rail services", false).await;

    {
        let mut tx = store.begin().await.unwrap();
        let InsertOutcome::Inserted(record_id) =
            tx.insert_analysis(&analysis(article)).await.unwrap()
        else {
            panic!("expected a fresh insert");
        };
        tx.insert_tag_associations(record_id, "Labor Action & Disputes", &[], TagCatalog::Category)
            .await
            .unwrap();
        // Dropped before the emotional-impact write and commit.
    }

    let since = Utc::now() - Duration::days(1);
    let backlog = store.fetch_unannotated(10, since).await.unwrap();
    assert!(backlog.iter().any(|a| a.id == article));
    let orphaned = count(
        store,
        "SELECT count(*) FROM news_article_tags t
         JOIN news_article_sentiments s ON s.id = t.news_article_sentiment_id
         WHERE s.news_article_id = $1",
        article,
    )
    .await;
    assert_eq!(orphaned, 0);

    let mut tx = store.begin().await.unwrap();
    let InsertOutcome::Inserted(record_id) = tx.insert_analysis(&analysis(article)).await.unwrap()
    else {
        panic!("expected the retry to insert");
    };
    tx.insert_tag_associations(record_id, "Labor Action & Disputes", &[], TagCatalog::Category)
        .await
        .unwrap();
    tx.insert_tag_associations(record_id, "Anger / Outrage", &[], TagCatalog::EmotionalImpact)
        .await
        .unwrap();
    tx.commit().await.unwrap();

    let emotional = count(
        store,
        "SELECT count(*) FROM news_article_emotional_impact WHERE news_article_sentiment_id = $1",
        record_id,
    )
    .await;
    assert_eq!(emotional, 1);
}

#[tokio::test]
async fn seeding_twice_adds_nothing_new() {
    let db = TestDb::start().await;
    let store = db.store();
    let vocabulary = TagVocabulary::new(TagCatalog::EmotionalImpact);

    let first = store.seed_tag_catalog(&vocabulary).await.unwrap();
    let second = store.seed_tag_catalog(&vocabulary).await.unwrap();

    assert_eq!(first, vocabulary.len() as u64);
    assert_eq!(second, 0);
}
