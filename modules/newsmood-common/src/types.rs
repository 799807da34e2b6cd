use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{EnrichError, EnrichResult};

// --- Stages ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Sentiment,
    Category,
    EmotionalImpact,
    Clickbait,
}

impl Stage {
    /// Execution order of the pipeline.
    pub const ORDER: [Stage; 4] = [
        Stage::Sentiment,
        Stage::Category,
        Stage::EmotionalImpact,
        Stage::Clickbait,
    ];

    /// Key under which this stage's provenance is stored in `version_info`.
    pub fn version_key(self) -> &'static str {
        match self {
            Stage::Sentiment => "sentiment",
            Stage::Category => "categories",
            Stage::EmotionalImpact => "emotional_impact",
            Stage::Clickbait => "clickbait",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Sentiment => write!(f, "sentiment"),
            Stage::Category => write!(f, "category"),
            Stage::EmotionalImpact => write!(f, "emotional_impact"),
            Stage::Clickbait => write!(f, "clickbait"),
        }
    }
}

// --- Inputs ---

/// One unannotated article as returned by the backlog query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacklogArticle {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
}

/// The text handed to every analyzer for one article.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadlineInput {
    article_id: i64,
    headline: String,
    description: Option<String>,
}

impl HeadlineInput {
    pub fn new(
        article_id: i64,
        headline: impl Into<String>,
        description: Option<String>,
    ) -> EnrichResult<Self> {
        let headline = headline.into().trim().to_string();
        if article_id <= 0 {
            return Err(EnrichError::InvalidInput(format!(
                "article id must be positive, got {article_id}"
            )));
        }
        if headline.is_empty() {
            return Err(EnrichError::InvalidInput(format!(
                "article {article_id} has an empty headline"
            )));
        }
        let description = description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Ok(Self {
            article_id,
            headline,
            description,
        })
    }

    pub fn article_id(&self) -> i64 {
        self.article_id
    }

    pub fn headline(&self) -> &str {
        &self.headline
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl TryFrom<BacklogArticle> for HeadlineInput {
    type Error = EnrichError;

    fn try_from(article: BacklogArticle) -> EnrichResult<Self> {
        HeadlineInput::new(article.id, article.title, article.description)
    }
}

// --- Stage results ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum SentimentLabel {
    #[serde(rename = "Very Negative")]
    VeryNegative,
    Negative,
    Neutral,
    Positive,
    #[serde(rename = "Very Positive")]
    VeryPositive,
}

impl SentimentLabel {
    pub const ALL: [SentimentLabel; 5] = [
        SentimentLabel::VeryNegative,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
        SentimentLabel::Positive,
        SentimentLabel::VeryPositive,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::VeryNegative => "Very Negative",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Positive => "Positive",
            SentimentLabel::VeryPositive => "Very Positive",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification model for news headline sentiment analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SentimentResult {
    /// The sentiment category of the headline
    pub sentiment: SentimentLabel,
    /// Confidence score from 0 to 100
    pub confidence: u8,
}

impl SentimentResult {
    pub const MAX_CONFIDENCE: u8 = 100;

    pub fn validate(self) -> EnrichResult<Self> {
        if self.confidence > Self::MAX_CONFIDENCE {
            return Err(EnrichError::SchemaValidation(format!(
                "sentiment confidence {} is outside 0..=100",
                self.confidence
            )));
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ClickbaitScore {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
}

impl ClickbaitScore {
    pub fn value(self) -> i16 {
        match self {
            ClickbaitScore::One => 1,
            ClickbaitScore::Two => 2,
            ClickbaitScore::Three => 3,
            ClickbaitScore::Four => 4,
            ClickbaitScore::Five => 5,
        }
    }
}

impl TryFrom<i16> for ClickbaitScore {
    type Error = EnrichError;

    fn try_from(value: i16) -> EnrichResult<Self> {
        match value {
            1 => Ok(ClickbaitScore::One),
            2 => Ok(ClickbaitScore::Two),
            3 => Ok(ClickbaitScore::Three),
            4 => Ok(ClickbaitScore::Four),
            5 => Ok(ClickbaitScore::Five),
            other => Err(EnrichError::SchemaValidation(format!(
                "clickbait score {other} is outside 1..=5"
            ))),
        }
    }
}

/// Classification model for news headline clickbait analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ClickbaitResult {
    /// The clickbait score from 1 (not clickbait) to 5 (extremely clickbait)
    pub score: ClickbaitScore,
}

/// Primary plus secondary tags from one of the closed vocabularies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TagResult {
    /// The primary tag
    pub primary_tag: String,
    /// The secondary tags, max 2
    pub secondary_tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum StageResult {
    Sentiment(SentimentResult),
    Category(TagResult),
    EmotionalImpact(TagResult),
    Clickbait(ClickbaitResult),
}

impl StageResult {
    pub fn stage(&self) -> Stage {
        match self {
            StageResult::Sentiment(_) => Stage::Sentiment,
            StageResult::Category(_) => Stage::Category,
            StageResult::EmotionalImpact(_) => Stage::EmotionalImpact,
            StageResult::Clickbait(_) => Stage::Clickbait,
        }
    }
}

/// Which prompt, model and temperature produced a stage result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageProvenance {
    #[serde(rename = "version")]
    pub prompt_version: i32,
    pub path: String,
    pub model: String,
    pub temperature: f32,
}

impl StageProvenance {
    /// The `version_info` entry for one stage.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "version": self.prompt_version,
            "path": self.path,
            "model": self.model,
            "temperature": self.temperature,
        })
    }
}

/// A stage result paired with its provenance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageAnalysis {
    pub result: StageResult,
    pub provenance: StageProvenance,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotated<T> {
    #[serde(flatten)]
    pub result: T,
    pub provenance: StageProvenance,
}

/// All four stage outputs for one article, ready to persist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisRecord {
    pub article_id: i64,
    pub sentiment: Annotated<SentimentResult>,
    pub category: Annotated<TagResult>,
    pub emotional_impact: Annotated<TagResult>,
    pub clickbait: Annotated<ClickbaitResult>,
}

impl AnalysisRecord {
    /// Provenance of every stage keyed the way `version_info` stores it.
    pub fn version_info(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        for (stage, provenance) in [
            (Stage::Sentiment, &self.sentiment.provenance),
            (Stage::Category, &self.category.provenance),
            (Stage::EmotionalImpact, &self.emotional_impact.provenance),
            (Stage::Clickbait, &self.clickbait.provenance),
        ] {
            map.insert(stage.version_key().to_string(), provenance.to_json());
        }
        serde_json::Value::Object(map)
    }
}
