use serde::{Deserialize, Serialize};

/// 解析器的原始輸出，只在單次請求內存在
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFeedItem {
    pub title: String,
    pub link: String,
    pub description: String,
    pub publish_date: String,
    pub category: String,
    /// May contain duplicates and comma-joined values; see `services::tags`.
    pub tags: Vec<String>,
}

impl RawFeedItem {
    /// An item is usable only when both title and link carry text.
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty() && !self.link.trim().is_empty()
    }
}

/// The article shape consumed by the homepage carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedArticle {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub description: String,
    pub date: String,
    pub link: String,
    #[serde(rename = "styleName", alias = "styleKey")]
    pub style_key: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// 管線狀態，只能往前推進
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Fetching,
    Parsing,
    Assembling,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArticleSource {
    Live,
    Fallback,
}

/// Outcome of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedReport {
    pub articles: Vec<NormalizedArticle>,
    pub source: ArticleSource,
    /// Stage at which the run stopped before falling back, if it did.
    pub failed_at: Option<PipelineState>,
}

impl FeedReport {
    pub fn is_fallback(&self) -> bool {
        self.source == ArticleSource::Fallback
    }
}
