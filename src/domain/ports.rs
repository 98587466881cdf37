use crate::domain::model::{NormalizedArticle, RawFeedItem};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where the raw feed markup comes from.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// One GET, no retries. Non-2xx maps to `FetchError`, network failures to `TransportError`.
    async fn fetch(&self) -> Result<String>;

    fn url(&self) -> &str;
}

pub trait FeedParser: Send + Sync {
    fn parse(&self, markup: &str) -> Result<Vec<RawFeedItem>>;

    fn name(&self) -> &'static str;
}

/// Static articles shown whenever live data is unavailable. Never empty.
pub trait FallbackProvider: Send + Sync {
    fn articles(&self) -> Vec<NormalizedArticle>;
}

pub trait ConfigProvider: Send + Sync {
    fn feed_url(&self) -> &str;
    fn parser_kind(&self) -> crate::adapters::parser::ParserKind;
    fn fallback_path(&self) -> Option<&str>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn fetch(&self) -> Result<String>;
    fn parse(&self, markup: &str) -> Result<Vec<RawFeedItem>>;
    fn assemble(&self, items: Vec<RawFeedItem>) -> Vec<NormalizedArticle>;
}
