pub mod config;
pub mod conversation;
pub mod discovery;
pub mod error;
pub mod feed;
pub mod matching;
pub mod musician;
pub mod project;
pub mod store;

// Re-export common error type
pub use error::{DoremeError, Result};

/// Current wall-clock time as Unix epoch milliseconds.
///
/// All persisted timestamps (`Message::time`, `Project::updated_at`) use this unit.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
