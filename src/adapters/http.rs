use crate::domain::ports::FeedSource;
use crate::utils::error::{FeedError, Result};
use async_trait::async_trait;
use reqwest::Client;

pub const DEFAULT_FEED_URL: &str = "https://note.weizwz.com/feed.xml";

/// Fetches the feed with a single GET and the transport's default timeouts.
#[derive(Debug, Clone)]
pub struct HttpFeedSource {
    client: Client,
    url: String,
}

impl HttpFeedSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), url)
    }

    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch(&self) -> Result<String> {
        tracing::debug!("Requesting feed: {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        tracing::debug!("Feed response status: {}", status);
        if !status.is_success() {
            return Err(FeedError::FetchError {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        tracing::debug!("Received {} bytes of feed markup", body.len());
        Ok(body)
    }

    fn url(&self) -> &str {
        &self.url
    }
}
