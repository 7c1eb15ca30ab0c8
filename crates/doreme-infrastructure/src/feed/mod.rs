//! Feed provider implementations and startup selection.

mod serpapi_provider;
mod static_provider;

use std::sync::Arc;

use doreme_core::config::DoremeConfig;
use doreme_core::feed::FeedProvider;

pub use serpapi_provider::{MAX_RESULTS, SERPAPI_BASE_URL, SerpApiFeedProvider};
pub use static_provider::{DEFAULT_SEARCH_DELAY, StaticFeedProvider};

/// Picks the remote provider when a credential is configured, the static one otherwise.
pub fn select_feed_provider(config: &DoremeConfig) -> Arc<dyn FeedProvider> {
    match config.serpapi_key.as_deref() {
        Some(key) => {
            tracing::info!("[Feed] Using SerpAPI feed provider");
            Arc::new(SerpApiFeedProvider::new(key))
        }
        None => {
            tracing::info!("[Feed] No SerpAPI key configured, using static feed");
            Arc::new(StaticFeedProvider::new(config.search_delay()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selects_static_without_key() {
        let provider = select_feed_provider(&DoremeConfig::default());
        assert_eq!(provider.name(), "static");
    }

    #[test]
    fn test_selects_serpapi_with_key() {
        let config = DoremeConfig {
            serpapi_key: Some("secret".to_string()),
            ..Default::default()
        };
        assert_eq!(select_feed_provider(&config).name(), "serpapi");
    }
}
