//! File-backed [`RecordStore`] writing one JSON file per namespace.

use async_trait::async_trait;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::path::Path;

use doreme_core::conversation::Conversation;
use doreme_core::error::{DoremeError, Result};
use doreme_core::matching::DecisionMap;
use doreme_core::project::Project;
use doreme_core::store::{Mutation, RecordStore, StorageKey};

use crate::paths::DoremePaths;
use crate::storage::AtomicJsonFile;

/// JSON record store.
///
/// Directory structure:
/// ```text
/// base_dir/
/// ├── doreme_conversations.json   # [ {id, musicianId, messages}, ... ]
/// ├── doreme_projects.json        # [ {id, title, isPublic, stage, ...}, ... ]
/// ├── doreme_matches.json         # { "<musicianId>": "liked" | "passed" }
/// └── doreme_onboarded.json       # true
/// ```
///
/// File I/O runs on the blocking pool. Writes and updates of one namespace
/// take that namespace's file lock, so separate store instances (or
/// processes) sharing a directory do not lose each other's changes.
#[derive(Debug, Clone)]
pub struct JsonRecordStore {
    paths: DoremePaths,
}

impl JsonRecordStore {
    pub fn new(paths: DoremePaths) -> Self {
        Self { paths }
    }

    /// Creates a store rooted at `base_dir` (for testing and explicit data dirs).
    pub fn with_base_dir(base_dir: &Path) -> Self {
        Self::new(DoremePaths::at(base_dir))
    }

    pub fn paths(&self) -> &DoremePaths {
        &self.paths
    }

    async fn read<T>(&self, key: StorageKey) -> Result<Option<T>>
    where
        T: Serialize + DeserializeOwned + Send + 'static,
    {
        let file = AtomicJsonFile::<T>::new(self.paths.namespace_file(key));
        let loaded = tokio::task::spawn_blocking(move || file.load())
            .await
            .map_err(|e| DoremeError::internal(format!("Failed to join task: {}", e)))?;

        loaded.map_err(|e| {
            tracing::warn!("[RecordStore] Failed to read {}: {}", key.as_str(), e);
            e.into()
        })
    }

    async fn write<T>(&self, key: StorageKey, value: T) -> Result<()>
    where
        T: Serialize + DeserializeOwned + Send + 'static,
    {
        let file = AtomicJsonFile::<T>::new(self.paths.namespace_file(key));
        tokio::task::spawn_blocking(move || file.replace(&value))
            .await
            .map_err(|e| DoremeError::internal(format!("Failed to join task: {}", e)))?
            .map_err(|e| {
                tracing::error!("[RecordStore] Failed to write {}: {}", key.as_str(), e);
                DoremeError::from(e)
            })?;

        tracing::debug!("[RecordStore] Wrote {}", key.as_str());
        Ok(())
    }

    async fn modify<T>(&self, key: StorageKey, mutation: Mutation<T>) -> Result<T>
    where
        T: Serialize + DeserializeOwned + Default + Send + 'static,
    {
        let file = AtomicJsonFile::<T>::new(self.paths.namespace_file(key));
        let updated = tokio::task::spawn_blocking(move || file.update(T::default(), mutation))
            .await
            .map_err(|e| DoremeError::internal(format!("Failed to join task: {}", e)))?;

        updated.map_err(|e| {
            tracing::warn!("[RecordStore] Failed to update {}: {}", key.as_str(), e);
            e.into()
        })
    }
}

/// Onboarding flag as persisted: JSON `true`, or the string `"true"` written
/// by earlier clients.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum OnboardedFlag {
    Bool(bool),
    Text(String),
}

impl OnboardedFlag {
    fn is_set(&self) -> bool {
        match self {
            OnboardedFlag::Bool(flag) => *flag,
            OnboardedFlag::Text(text) => text == "true",
        }
    }
}

#[async_trait]
impl RecordStore for JsonRecordStore {
    async fn load_conversations(&self) -> Result<Vec<Conversation>> {
        Ok(self
            .read::<Vec<Conversation>>(StorageKey::Conversations)
            .await?
            .unwrap_or_default())
    }

    async fn save_conversations(&self, conversations: &[Conversation]) -> Result<()> {
        self.write(StorageKey::Conversations, conversations.to_vec())
            .await
    }

    async fn update_conversations(
        &self,
        mutation: Mutation<Vec<Conversation>>,
    ) -> Result<Vec<Conversation>> {
        self.modify(StorageKey::Conversations, mutation).await
    }

    async fn load_projects(&self) -> Result<Vec<Project>> {
        Ok(self
            .read::<Vec<Project>>(StorageKey::Projects)
            .await?
            .unwrap_or_default())
    }

    async fn save_projects(&self, projects: &[Project]) -> Result<()> {
        self.write(StorageKey::Projects, projects.to_vec()).await
    }

    async fn update_projects(&self, mutation: Mutation<Vec<Project>>) -> Result<Vec<Project>> {
        self.modify(StorageKey::Projects, mutation).await
    }

    async fn load_decisions(&self) -> Result<DecisionMap> {
        Ok(self
            .read::<DecisionMap>(StorageKey::Matches)
            .await?
            .unwrap_or_default())
    }

    async fn save_decisions(&self, decisions: &DecisionMap) -> Result<()> {
        self.write(StorageKey::Matches, decisions.clone()).await
    }

    async fn update_decisions(&self, mutation: Mutation<DecisionMap>) -> Result<DecisionMap> {
        self.modify(StorageKey::Matches, mutation).await
    }

    async fn is_onboarded(&self) -> Result<bool> {
        Ok(self
            .read::<OnboardedFlag>(StorageKey::Onboarded)
            .await?
            .is_some_and(|flag| flag.is_set()))
    }

    async fn mark_onboarded(&self) -> Result<()> {
        self.write(StorageKey::Onboarded, true).await
    }
}
