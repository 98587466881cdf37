pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "server")]
pub mod web;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::TomlConfig;
pub use core::{build_engine, engine::FeedEngine, pipeline::RssPipeline, HomepageEngine};
pub use domain::model::{ArticleSource, FeedReport, NormalizedArticle, RawFeedItem};
pub use utils::error::{FeedError, Result};
