//! YouTube search through SerpAPI.
//!
//! Any failure (transport error, non-success status, unreadable body) degrades
//! to the full fallback list, unfiltered by the query.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use doreme_core::error::{DoremeError, Result};
use doreme_core::feed::{FeedItem, FeedProvider, fallback_feed_items};

pub const SERPAPI_BASE_URL: &str = "https://serpapi.com/search";
const ENGINE: &str = "youtube";
/// Results kept from one response.
pub const MAX_RESULTS: usize = 10;

#[derive(Clone)]
pub struct SerpApiFeedProvider {
    client: Client,
    api_key: String,
    base_url: String,
    fallback: Vec<FeedItem>,
}

impl SerpApiFeedProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: SERPAPI_BASE_URL.to_string(),
            fallback: fallback_feed_items(),
        }
    }

    /// Points the provider at another endpoint (for testing).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Uses a preconfigured HTTP client (proxy, timeout, TLS settings).
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Overrides the content served when the request fails.
    pub fn with_fallback(mut self, fallback: Vec<FeedItem>) -> Self {
        self.fallback = fallback;
        self
    }

    async fn fetch(&self, query: &str) -> Result<Vec<FeedItem>> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("engine", ENGINE),
                ("search_query", query),
                ("api_key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|err| DoremeError::provider(format!("SerpAPI request failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DoremeError::provider(format!(
                "SerpAPI returned status {status}"
            )));
        }

        let payload: SearchResponse = response.json().await.map_err(|err| {
            DoremeError::provider(format!("Failed to parse SerpAPI response: {err}"))
        })?;

        Ok(map_video_results(payload.video_results))
    }
}

#[async_trait]
impl FeedProvider for SerpApiFeedProvider {
    fn name(&self) -> &'static str {
        "serpapi"
    }

    async fn search(&self, query: &str) -> Result<Vec<FeedItem>> {
        match self.fetch(query).await {
            Ok(items) => {
                tracing::debug!(
                    "[SerpApiFeedProvider] {} results for '{}'",
                    items.len(),
                    query
                );
                Ok(items)
            }
            Err(err) => {
                tracing::warn!(
                    "[SerpApiFeedProvider] {}; falling back to static feed",
                    err
                );
                Ok(self.fallback.clone())
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    video_results: Vec<VideoResult>,
}

#[derive(Debug, Default, Deserialize)]
struct VideoResult {
    #[serde(default)]
    channel: Option<Channel>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    link: Option<String>,
    /// Either a plain URL or `{ "static": url, "rich": url }`.
    #[serde(default)]
    thumbnail: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
struct Channel {
    #[serde(default)]
    name: Option<String>,
}

fn map_video_results(results: Vec<VideoResult>) -> Vec<FeedItem> {
    results
        .into_iter()
        .take(MAX_RESULTS)
        .enumerate()
        .map(|(index, video)| {
            let channel_name = video
                .channel
                .and_then(|c| c.name)
                .filter(|n| !n.is_empty());

            FeedItem {
                id: format!("serp-{index}"),
                handle: format!("@{}", handle_from_channel(channel_name.as_deref())),
                creator_name: channel_name.unwrap_or_else(|| "Unknown Creator".to_string()),
                location: None,
                title: video
                    .title
                    .filter(|t| !t.is_empty())
                    .unwrap_or_else(|| "Untitled".to_string()),
                description: Some(video.description.unwrap_or_default()),
                video_url: video.link,
                thumbnail_url: video.thumbnail.as_ref().and_then(thumbnail_url),
                tags: Some(Vec::new()),
            }
        })
        .collect()
}

/// Lowercased channel name with all whitespace removed, or `unknown`.
fn handle_from_channel(name: Option<&str>) -> String {
    let handle: String = name
        .unwrap_or_default()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    if handle.is_empty() {
        "unknown".to_string()
    } else {
        handle
    }
}

fn thumbnail_url(value: &Value) -> Option<String> {
    match value {
        Value::String(url) => Some(url.clone()),
        Value::Object(map) => map
            .get("static")
            .or_else(|| map.get("rich"))
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    }
}
