use crate::adapters::parser::{build_parser, ParserKind};
use crate::domain::model::{NormalizedArticle, RawFeedItem};
use crate::domain::ports::{FeedParser, FeedSource, Pipeline};
use crate::domain::services::assemble_articles;
use crate::utils::error::Result;
use std::sync::Arc;

/// Fetch → parse → assemble over a pluggable source and parser.
pub struct RssPipeline {
    source: Arc<dyn FeedSource>,
    parser: Box<dyn FeedParser>,
}

impl RssPipeline {
    pub fn new(source: Arc<dyn FeedSource>, parser_kind: ParserKind) -> Self {
        Self::with_parser(source, build_parser(parser_kind))
    }

    pub fn with_parser(source: Arc<dyn FeedSource>, parser: Box<dyn FeedParser>) -> Self {
        Self { source, parser }
    }

    pub fn source(&self) -> &Arc<dyn FeedSource> {
        &self.source
    }

    pub fn parser_name(&self) -> &'static str {
        self.parser.name()
    }
}

#[async_trait::async_trait]
impl Pipeline for RssPipeline {
    async fn fetch(&self) -> Result<String> {
        self.source.fetch().await
    }

    fn parse(&self, markup: &str) -> Result<Vec<RawFeedItem>> {
        self.parser.parse(markup)
    }

    fn assemble(&self, items: Vec<RawFeedItem>) -> Vec<NormalizedArticle> {
        assemble_articles(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::FeedError;
    use async_trait::async_trait;

    struct StaticSource {
        body: String,
    }

    #[async_trait]
    impl FeedSource for StaticSource {
        async fn fetch(&self) -> Result<String> {
            Ok(self.body.clone())
        }

        fn url(&self) -> &str {
            "memory://feed"
        }
    }

    struct FailingSource;

    #[async_trait]
    impl FeedSource for FailingSource {
        async fn fetch(&self) -> Result<String> {
            Err(FeedError::FetchError { status: 502 })
        }

        fn url(&self) -> &str {
            "memory://down"
        }
    }

    const FEED: &str = "<rss><channel>\
        <item><title>A</title><link>http://x/a</link><tag>Rust</tag></item>\
        <item><title>B</title><link>http://x/b</link></item>\
        </channel></rss>";

    #[tokio::test]
    async fn test_stages_with_each_parser() {
        for kind in [ParserKind::Xml, ParserKind::Pattern] {
            let source = Arc::new(StaticSource {
                body: FEED.to_string(),
            });
            let pipeline = RssPipeline::new(source, kind);
            assert_eq!(pipeline.parser_name(), kind.to_string());

            let markup = pipeline.fetch().await.unwrap();
            let items = pipeline.parse(&markup).unwrap();
            let articles = pipeline.assemble(items);

            assert_eq!(articles.len(), 2);
            assert_eq!(articles[0].style_key, "weiz-icon-rust");
            assert_eq!(articles[1].id, 2);
        }
    }

    #[tokio::test]
    async fn test_fetch_error_is_propagated() {
        let pipeline = RssPipeline::new(Arc::new(FailingSource), ParserKind::Xml);
        let err = pipeline.fetch().await.unwrap_err();
        assert!(matches!(err, FeedError::FetchError { status: 502 }));
        assert_eq!(pipeline.source().url(), "memory://down");
    }
}
