//! Real analyzers against a scripted model and an in-memory store.

use std::sync::Arc;

use serde_json::json;

use newsmood_common::{EnrichError, HeadlineInput, Stage, TagCatalog, TagDefinition, TagVocabulary};
use newsmood_enricher::analyzers::{
    CategoryAnalyzer, ClickbaitAnalyzer, EmotionalImpactAnalyzer, SentimentAnalyzer,
};
use newsmood_enricher::testing::{stage_prompt, MockModel, MockStore};
use newsmood_enricher::{AnalyzerSet, PipelineExecutor, PipelineOutcome, PipelineStep};

const CATEGORY_MODEL: &str = "openai/gpt-4o";
const EMOTION_MODEL: &str = "anthropic/claude-haiku-4-5";

/// A small category catalog that knows nothing about gaming.
static NEWSROOM_CATEGORIES: [TagDefinition; 3] = [
    TagDefinition {
        name: "Banking & Financial Services",
        guidelines: &["Banks, lending and interest rates"],
    },
    TagDefinition {
        name: "Taxation Policy",
        guidelines: &["Tax rates and tax law"],
    },
    TagDefinition {
        name: "Housing Crisis",
        guidelines: &[],
    },
];

fn analyzers(model: Arc<MockModel>) -> AnalyzerSet {
    AnalyzerSet::new(
        Arc::new(
            SentimentAnalyzer::new(
                stage_prompt(Stage::Sentiment, "{{headline}} ({{categories}})", CATEGORY_MODEL),
                model.clone(),
            )
            .unwrap(),
        ),
        Arc::new(
            CategoryAnalyzer::new(
                stage_prompt(
                    Stage::Category,
                    "{{headline}}\n{{description}}\n{{category_tags_list}}",
                    CATEGORY_MODEL,
                ),
                model.clone(),
                Arc::new(TagVocabulary::from_definitions(
                    TagCatalog::Category,
                    &NEWSROOM_CATEGORIES,
                )),
            )
            .unwrap(),
        ),
        Arc::new(
            EmotionalImpactAnalyzer::new(
                stage_prompt(
                    Stage::EmotionalImpact,
                    "{{headline}}\n{{emotional_impact_tags_list}}",
                    EMOTION_MODEL,
                ),
                model.clone(),
                Arc::new(TagVocabulary::new(TagCatalog::EmotionalImpact)),
            )
            .unwrap(),
        ),
        Arc::new(
            ClickbaitAnalyzer::new(
                stage_prompt(Stage::Clickbait, "{{headline}}", CATEGORY_MODEL),
                model,
            )
            .unwrap(),
        ),
    )
    .unwrap()
}

fn scripted_model() -> MockModel {
    MockModel::new()
        .on_schema(
            "SentimentResult",
            json!({"sentiment": "Negative", "confidence": 80}),
        )
        .on_model(
            CATEGORY_MODEL,
            "TagResult",
            json!({
                "primary_tag": "Banking & Financial Services",
                "secondary_tags": ["Taxation Policy", "Esports"]
            }),
        )
        .on_model(
            EMOTION_MODEL,
            "TagResult",
            json!({"primary_tag": "Anxiety / Fear", "secondary_tags": []}),
        )
        .on_schema("ClickbaitResult", json!({"score": "2"}))
}

fn rate_hike() -> HeadlineInput {
    HeadlineInput::new(42, "Bank raises interest rates again", None).unwrap()
}

#[tokio::test]
async fn rate_hike_headline_is_persisted_with_filtered_tags() {
    let model = Arc::new(scripted_model());
    let store = Arc::new(MockStore::new());
    let executor = PipelineExecutor::new(analyzers(model.clone()), store.clone());

    let outcome = executor.run(&rate_hike()).await.unwrap();
    assert!(matches!(outcome, PipelineOutcome::Persisted { .. }));

    let analyses = store.analyses();
    assert_eq!(analyses.len(), 1);
    assert_eq!(analyses[0].news_article_id, 42);
    assert_eq!(analyses[0].sentiment_label, "Negative");
    assert_eq!(analyses[0].sentiment_confidence, 80);
    assert_eq!(analyses[0].clickbait_level, 2);

    let tag_calls = store.tag_calls();
    assert_eq!(tag_calls.len(), 2);

    assert_eq!(tag_calls[0].catalog, TagCatalog::Category);
    assert_eq!(tag_calls[0].primary_tag, "Banking & Financial Services");
    assert_eq!(tag_calls[0].secondary_tags, vec!["Taxation Policy".to_string()]);

    assert_eq!(tag_calls[1].catalog, TagCatalog::EmotionalImpact);
    assert_eq!(tag_calls[1].primary_tag, "Anxiety / Fear");
    assert!(tag_calls[1].secondary_tags.is_empty());

    // Stages ran in pipeline order.
    let schemas: Vec<String> = model.requests().into_iter().map(|r| r.schema_name).collect();
    assert_eq!(
        schemas,
        vec!["SentimentResult", "TagResult", "TagResult", "ClickbaitResult"]
    );
}

#[tokio::test]
async fn provenance_for_every_stage_is_stored() {
    let store = Arc::new(MockStore::new());
    let executor = PipelineExecutor::new(analyzers(Arc::new(scripted_model())), store.clone());

    executor.run(&rate_hike()).await.unwrap();

    let version_info = &store.analyses()[0].version_info;
    for key in ["sentiment", "categories", "emotional_impact", "clickbait"] {
        assert_eq!(version_info[key]["version"], 1, "missing provenance for {key}");
        assert_eq!(version_info[key]["path"], "prompts/test.txt");
    }
    assert_eq!(version_info["emotional_impact"]["model"], EMOTION_MODEL);
    assert_eq!(version_info["clickbait"]["model"], CATEGORY_MODEL);
}

#[tokio::test]
async fn malformed_clickbait_response_writes_nothing() {
    let model = scripted_model().on_schema("ClickbaitResult", json!({"score": "seven"}));
    let store = Arc::new(MockStore::new());
    let executor = PipelineExecutor::new(analyzers(Arc::new(model)), store.clone());

    let failure = executor.run(&rate_hike()).await.unwrap_err();

    assert_eq!(failure.article_id, 42);
    assert_eq!(failure.step, PipelineStep::Stage(Stage::Clickbait));
    assert!(matches!(failure.error, EnrichError::SchemaValidation(_)));
    assert!(store.analyses().is_empty());
    assert!(store.tag_calls().is_empty());
}

#[tokio::test]
async fn provider_outage_at_first_stage_skips_the_rest() {
    let model = Arc::new(scripted_model().fail_on("SentimentResult", "502 bad gateway"));
    let store = Arc::new(MockStore::new());
    let executor = PipelineExecutor::new(analyzers(model.clone()), store.clone());

    let failure = executor.run(&rate_hike()).await.unwrap_err();

    assert_eq!(failure.step, PipelineStep::Stage(Stage::Sentiment));
    assert!(matches!(failure.error, EnrichError::Provider(_)));
    assert_eq!(model.requests().len(), 1);
    assert!(store.analyses().is_empty());
}

#[tokio::test]
async fn second_run_for_same_article_is_already_analyzed() {
    let store = Arc::new(MockStore::new());
    let executor = PipelineExecutor::new(analyzers(Arc::new(scripted_model())), store.clone());

    executor.run(&rate_hike()).await.unwrap();
    let second = executor.run(&rate_hike()).await.unwrap();

    assert_eq!(second, PipelineOutcome::AlreadyAnalyzed);
    assert_eq!(store.analyses().len(), 1);
    assert_eq!(store.tag_calls().len(), 2);
}
