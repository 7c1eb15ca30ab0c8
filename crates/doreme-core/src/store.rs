//! Record store trait.
//!
//! One read, one write and one read-modify-write method per record kind. Each
//! namespace is independent: there is no transaction spanning two of them, and
//! every write replaces the whole collection.

use async_trait::async_trait;

use crate::conversation::Conversation;
use crate::error::Result;
use crate::matching::DecisionMap;
use crate::project::Project;

/// Storage namespace keys. These names are part of the persisted format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Conversations,
    Projects,
    Matches,
    Onboarded,
}

impl StorageKey {
    pub const ALL: [StorageKey; 4] = [
        StorageKey::Conversations,
        StorageKey::Projects,
        StorageKey::Matches,
        StorageKey::Onboarded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::Conversations => "doreme_conversations",
            StorageKey::Projects => "doreme_projects",
            StorageKey::Matches => "doreme_matches",
            StorageKey::Onboarded => "doreme_onboarded",
        }
    }
}

/// In-place edit applied by the `update_*` methods. Returns whether it changed
/// anything; unchanged collections are not written back.
pub type Mutation<T> = Box<dyn FnOnce(&mut T) -> bool + Send>;

/// Local persistence for conversations, projects, decisions and the
/// onboarding flag.
///
/// Absent data reads as the empty value. Data that does not parse as the
/// expected shape is reported as a serialization error; stores never repair it.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn load_conversations(&self) -> Result<Vec<Conversation>>;

    async fn save_conversations(&self, conversations: &[Conversation]) -> Result<()>;

    async fn update_conversations(
        &self,
        mutation: Mutation<Vec<Conversation>>,
    ) -> Result<Vec<Conversation>>;

    async fn load_projects(&self) -> Result<Vec<Project>>;

    async fn save_projects(&self, projects: &[Project]) -> Result<()>;

    async fn update_projects(&self, mutation: Mutation<Vec<Project>>) -> Result<Vec<Project>>;

    async fn load_decisions(&self) -> Result<DecisionMap>;

    async fn save_decisions(&self, decisions: &DecisionMap) -> Result<()>;

    async fn update_decisions(&self, mutation: Mutation<DecisionMap>) -> Result<DecisionMap>;

    async fn is_onboarded(&self) -> Result<bool>;

    async fn mark_onboarded(&self) -> Result<()>;
}
