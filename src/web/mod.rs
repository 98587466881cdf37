use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/rss", get(handlers::proxy_rss))
        .route("/api/articles", get(handlers::list_articles))
        .route(
            "/.well-known/appspecific/com.chrome.devtools.json",
            get(handlers::devtools_manifest),
        )
        .layer(cors)
        .with_state(state)
}

/// Binds and serves until the process is stopped.
pub async fn serve(addr: std::net::SocketAddr, state: AppState) -> crate::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("🚀 Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, create_app(state)).await?;
    Ok(())
}
