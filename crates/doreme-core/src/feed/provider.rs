//! Feed provider trait definition.

use async_trait::async_trait;

use crate::error::Result;
use crate::feed::FeedItem;

/// Source of home feed content for a free-text query.
///
/// Implementations own their failure policy: a remote provider degrades to
/// fallback content itself, so callers never see transport details.
#[async_trait]
pub trait FeedProvider: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Returns feed items for `query`. An empty query means "everything".
    async fn search(&self, query: &str) -> Result<Vec<FeedItem>>;
}
