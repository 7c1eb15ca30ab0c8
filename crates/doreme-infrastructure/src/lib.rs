pub mod feed;
pub mod json_record_store;
pub mod memory_record_store;
pub mod paths;
pub mod storage;

pub use crate::feed::{SerpApiFeedProvider, StaticFeedProvider, select_feed_provider};
pub use crate::json_record_store::JsonRecordStore;
pub use crate::memory_record_store::InMemoryRecordStore;
pub use crate::paths::DoremePaths;
