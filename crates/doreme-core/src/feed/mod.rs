//! Home feed content and the provider abstraction that supplies it.

mod fallback;
mod model;
mod provider;

pub use fallback::{fallback_feed_items, filter_feed_items};
pub use model::FeedItem;
pub use provider::FeedProvider;
