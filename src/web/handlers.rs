use crate::domain::model::NormalizedArticle;
use crate::web::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

pub const FEED_CACHE_CONTROL: &str = "public, max-age=300";
pub const PROXY_FAILURE_BODY: &str = "Failed to fetch RSS";

/// Forwards the upstream feed unchanged so browsers can read it cross-origin.
pub async fn proxy_rss(State(state): State<AppState>) -> Response {
    match state.source.fetch().await {
        Ok(body) => (
            [
                (header::CONTENT_TYPE, "application/xml"),
                (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
                (header::CACHE_CONTROL, FEED_CACHE_CONTROL),
            ],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to fetch RSS from {}: {}", state.source.url(), e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, "text/plain")],
                PROXY_FAILURE_BODY,
            )
                .into_response()
        }
    }
}

/// The normalized list, live or fallback. Always 200.
pub async fn list_articles(State(state): State<AppState>) -> Json<Vec<NormalizedArticle>> {
    let report = state.engine.run_report().await;
    tracing::info!(
        "Serving {} article(s) from {:?}",
        report.articles.len(),
        report.source
    );
    Json(report.articles)
}

/// Empty JSON so browser devtools stop logging 404s for this path.
pub async fn devtools_manifest() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], "{}")
}
