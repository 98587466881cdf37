use crate::adapters::{HttpFeedSource, StaticFallback};
use crate::core::engine::FeedEngine;
use crate::core::pipeline::RssPipeline;
use crate::domain::ports::{ConfigProvider, FeedSource};
use crate::utils::error::Result;
use std::sync::Arc;

pub type HomepageEngine = FeedEngine<RssPipeline, StaticFallback>;

/// Fallback from the configured JSON file, or the built-in articles.
pub fn load_fallback<C: ConfigProvider + ?Sized>(config: &C) -> Result<StaticFallback> {
    match config.fallback_path() {
        Some(path) => StaticFallback::from_json_file(path),
        None => Ok(StaticFallback::builtin()),
    }
}

/// Wires source, parser and fallback from configuration.
///
/// A broken fallback file fails here, at start-up, rather than on a request.
pub fn build_engine<C: ConfigProvider + ?Sized>(config: &C) -> Result<HomepageEngine> {
    let source: Arc<dyn FeedSource> = Arc::new(HttpFeedSource::new(config.feed_url()));
    build_engine_with_source(config, source)
}

pub fn build_engine_with_source<C: ConfigProvider + ?Sized>(
    config: &C,
    source: Arc<dyn FeedSource>,
) -> Result<HomepageEngine> {
    let fallback = load_fallback(config)?;
    let pipeline = RssPipeline::new(source, config.parser_kind());

    tracing::info!(
        "Feed engine ready: url={}, parser={}, fallback_articles={}",
        config.feed_url(),
        pipeline.parser_name(),
        fallback.len()
    );

    Ok(FeedEngine::new(pipeline, fallback))
}
