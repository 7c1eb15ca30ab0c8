//! Application layer for DoReMe.
//!
//! Use cases that coordinate the domain types in `doreme-core` with the
//! stores and feed providers in `doreme-infrastructure`.

pub mod bootstrap;
pub mod conversation_service;
pub mod feed_session;
pub mod find_session;
pub mod match_tracker;
pub mod onboarding;
pub mod project_service;
pub mod telemetry;

pub use bootstrap::AppContext;
pub use conversation_service::ConversationService;
pub use feed_session::FeedSession;
pub use find_session::FindSession;
pub use match_tracker::MatchTracker;
pub use onboarding::OnboardingService;
pub use project_service::ProjectService;
