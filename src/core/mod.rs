pub mod bootstrap;
pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{FeedReport, NormalizedArticle, RawFeedItem};
pub use crate::domain::ports::{FallbackProvider, FeedParser, FeedSource, Pipeline};
pub use crate::utils::error::Result;
pub use bootstrap::{build_engine, build_engine_with_source, HomepageEngine};
