use crate::core::HomepageEngine;
use crate::domain::ports::FeedSource;
use std::sync::Arc;

/// Read-only for the life of the process.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn FeedSource>,
    pub engine: Arc<HomepageEngine>,
}

impl AppState {
    pub fn new(engine: HomepageEngine) -> Self {
        let source = engine.pipeline().source().clone();
        Self {
            source,
            engine: Arc::new(engine),
        }
    }
}
