use crate::traits::FetchFeed;
use crate::types::{CuratorError, FetchConfig, FetchedItem, Result};
use async_trait::async_trait;
use chrono::Utc;
use feed_rs::parser;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Retrieves and parses one feed document over HTTP. Failures are
/// scoped to the feed being fetched; the orchestrator decides what to
/// do with them.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(config: &FetchConfig) -> Self {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

#[async_trait]
impl FetchFeed for Fetcher {
    async fn fetch(&self, feed_url: &str) -> Result<Vec<FetchedItem>> {
        debug!("Fetching feed: {}", feed_url);

        let response = self.client.get(feed_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CuratorError::General(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response.bytes().await?;
        let feed = parser::parse(body.as_ref())
            .map_err(|e| CuratorError::Parse(format!("Failed to parse feed: {}", e)))?;

        let items = feed
            .entries
            .into_iter()
            .map(|entry| {
                // Missing titles and links surface as empty strings so
                // the orchestrator can count them as skips.
                let title = entry.title.map(|t| t.content).unwrap_or_default();
                let link = entry
                    .links
                    .first()
                    .map(|l| l.href.clone())
                    .unwrap_or_default();
                let snippet = entry.summary.map(|s| s.content);
                let published_at = entry
                    .published
                    .or(entry.updated)
                    .map(|dt| dt.with_timezone(&Utc));

                FetchedItem {
                    title,
                    link,
                    published_at,
                    snippet,
                }
            })
            .collect::<Vec<_>>();

        debug!("Parsed {} entries from {}", items.len(), feed_url);
        Ok(items)
    }
}
