use crate::domain::model::{ArticleSource, FeedReport, NormalizedArticle, PipelineState};
use crate::domain::ports::{FallbackProvider, Pipeline};
use crate::utils::error::FeedError;

/// Runs one pipeline execution and substitutes the fallback list on any failure.
///
/// `Idle → Fetching → Parsing → Assembling → Done`. An error or an empty
/// assembly at any stage ends in `Done` with the fallback articles; there is no
/// retry transition.
pub struct FeedEngine<P: Pipeline, F: FallbackProvider> {
    pipeline: P,
    fallback: F,
}

impl<P: Pipeline, F: FallbackProvider> FeedEngine<P, F> {
    pub fn new(pipeline: P, fallback: F) -> Self {
        Self { pipeline, fallback }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    /// The article list for one request. Never fails.
    pub async fn run(&self) -> Vec<NormalizedArticle> {
        self.run_report().await.articles
    }

    pub async fn run_report(&self) -> FeedReport {
        let mut state = PipelineState::Idle;
        tracing::debug!("Feed pipeline state: {:?}", state);

        state = self.advance(state, PipelineState::Fetching);
        let markup = match self.pipeline.fetch().await {
            Ok(markup) => markup,
            Err(e) => return self.fall_back(state, Some(e)),
        };

        state = self.advance(state, PipelineState::Parsing);
        let items = match self.pipeline.parse(&markup) {
            Ok(items) => items,
            Err(e) => return self.fall_back(state, Some(e)),
        };
        tracing::info!("Parsed {} feed item(s)", items.len());

        state = self.advance(state, PipelineState::Assembling);
        let articles = self.pipeline.assemble(items);
        if articles.is_empty() {
            return self.fall_back(state, None);
        }

        self.advance(state, PipelineState::Done);
        tracing::info!("✅ Serving {} live article(s)", articles.len());
        FeedReport {
            articles,
            source: ArticleSource::Live,
            failed_at: None,
        }
    }

    fn advance(&self, from: PipelineState, to: PipelineState) -> PipelineState {
        tracing::debug!("Feed pipeline state: {:?} -> {:?}", from, to);
        to
    }

    fn fall_back(&self, stage: PipelineState, error: Option<FeedError>) -> FeedReport {
        match &error {
            Some(e) if e.triggers_fallback() => tracing::warn!(
                "⚠️ Feed pipeline failed while {:?} ({:?}): {}. Using fallback articles",
                stage,
                e.category(),
                e
            ),
            Some(e) => tracing::error!(
                "❌ Unexpected {:?} error while {:?}: {}. Using fallback articles",
                e.category(),
                stage,
                e
            ),
            None => tracing::warn!("⚠️ Feed yielded no usable articles. Using fallback articles"),
        }
        if let Some(e) = &error {
            tracing::debug!("💡 {}", e.recovery_suggestion());
        }

        FeedReport {
            articles: self.fallback.articles(),
            source: ArticleSource::Fallback,
            failed_at: Some(stage),
        }
    }
}
