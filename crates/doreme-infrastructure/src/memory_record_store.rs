//! Process-local [`RecordStore`].
//!
//! Used when no data directory is available and in tests. Contents live only
//! as long as the store.

use async_trait::async_trait;
use tokio::sync::Mutex;

use doreme_core::conversation::Conversation;
use doreme_core::error::Result;
use doreme_core::matching::DecisionMap;
use doreme_core::project::Project;
use doreme_core::store::{Mutation, RecordStore};

#[derive(Debug, Default)]
struct Records {
    conversations: Vec<Conversation>,
    projects: Vec<Project>,
    decisions: DecisionMap,
    onboarded: bool,
}

#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    records: Mutex<Records>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn load_conversations(&self) -> Result<Vec<Conversation>> {
        Ok(self.records.lock().await.conversations.clone())
    }

    async fn save_conversations(&self, conversations: &[Conversation]) -> Result<()> {
        self.records.lock().await.conversations = conversations.to_vec();
        Ok(())
    }

    async fn update_conversations(
        &self,
        mutation: Mutation<Vec<Conversation>>,
    ) -> Result<Vec<Conversation>> {
        let mut records = self.records.lock().await;
        mutation(&mut records.conversations);
        Ok(records.conversations.clone())
    }

    async fn load_projects(&self) -> Result<Vec<Project>> {
        Ok(self.records.lock().await.projects.clone())
    }

    async fn save_projects(&self, projects: &[Project]) -> Result<()> {
        self.records.lock().await.projects = projects.to_vec();
        Ok(())
    }

    async fn update_projects(&self, mutation: Mutation<Vec<Project>>) -> Result<Vec<Project>> {
        let mut records = self.records.lock().await;
        mutation(&mut records.projects);
        Ok(records.projects.clone())
    }

    async fn load_decisions(&self) -> Result<DecisionMap> {
        Ok(self.records.lock().await.decisions.clone())
    }

    async fn save_decisions(&self, decisions: &DecisionMap) -> Result<()> {
        self.records.lock().await.decisions = decisions.clone();
        Ok(())
    }

    async fn update_decisions(&self, mutation: Mutation<DecisionMap>) -> Result<DecisionMap> {
        let mut records = self.records.lock().await;
        mutation(&mut records.decisions);
        Ok(records.decisions.clone())
    }

    async fn is_onboarded(&self) -> Result<bool> {
        Ok(self.records.lock().await.onboarded)
    }

    async fn mark_onboarded(&self) -> Result<()> {
        self.records.lock().await.onboarded = true;
        Ok(())
    }
}
