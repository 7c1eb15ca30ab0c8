//! Offline feed provider backed by the fixed fallback list.

use async_trait::async_trait;
use std::time::Duration;

use doreme_core::error::Result;
use doreme_core::feed::{FeedItem, FeedProvider, fallback_feed_items, filter_feed_items};

/// Default simulated latency, so loading states behave as they do online.
pub const DEFAULT_SEARCH_DELAY: Duration = Duration::from_millis(800);

/// Serves the fallback list after a fixed delay, filtered by the query.
#[derive(Debug, Clone)]
pub struct StaticFeedProvider {
    items: Vec<FeedItem>,
    delay: Duration,
}

impl Default for StaticFeedProvider {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DELAY)
    }
}

impl StaticFeedProvider {
    pub fn new(delay: Duration) -> Self {
        Self {
            items: fallback_feed_items(),
            delay,
        }
    }

    /// Overrides the item list (for testing).
    pub fn with_items(mut self, items: Vec<FeedItem>) -> Self {
        self.items = items;
        self
    }
}

#[async_trait]
impl FeedProvider for StaticFeedProvider {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn search(&self, query: &str) -> Result<Vec<FeedItem>> {
        tracing::debug!("[StaticFeedProvider] No search credential, serving fallback feed");
        tokio::time::sleep(self.delay).await;
        Ok(filter_feed_items(self.items.clone(), query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_empty_query_returns_full_list_after_delay() {
        let provider = StaticFeedProvider::default();
        let started = Instant::now();

        let items = provider.search("").await.unwrap();

        assert_eq!(items, fallback_feed_items());
        assert!(started.elapsed() >= DEFAULT_SEARCH_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_query_filters_case_insensitively() {
        let provider = StaticFeedProvider::default();
        let items = provider.search("Jazz").await.unwrap();

        assert!(!items.is_empty());
        for item in &items {
            assert!(item.matches_lowercase("jazz"), "{} should match", item.id);
        }
        assert!(items.len() < fallback_feed_items().len());
    }

    #[tokio::test]
    async fn test_zero_delay() {
        let provider = StaticFeedProvider::new(Duration::ZERO).with_items(vec![]);
        assert!(provider.search("anything").await.unwrap().is_empty());
    }
}
