use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

use doreme_core::config::DoremeConfig;
use doreme_core::musician::default_musicians;
use doreme_core::store::RecordStore;
use doreme_infrastructure::{
    DoremePaths, InMemoryRecordStore, JsonRecordStore, select_feed_provider,
};

use crate::{
    ConversationService, FeedSession, FindSession, MatchTracker, OnboardingService, ProjectService,
};

/// Fully wired services sharing one record store.
pub struct AppContext {
    pub config: DoremeConfig,
    pub store: Arc<dyn RecordStore>,
    pub conversations: Arc<ConversationService>,
    pub projects: Arc<ProjectService>,
    pub matches: Arc<MatchTracker>,
    pub feed: Arc<FeedSession>,
    pub onboarding: Arc<OnboardingService>,
}

impl AppContext {
    /// Loads configuration and wires the services.
    ///
    /// Reads `config_file` when given, otherwise `config.toml` inside the data
    /// directory selected by the environment. Environment variables override
    /// both.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let config_file = match config_file {
            Some(path) => Some(path.to_path_buf()),
            None => default_config_file(&DoremeConfig::from_env()),
        };
        let config = DoremeConfig::load(config_file.as_deref()).with_context(|| {
            format!(
                "Failed to load configuration from {}",
                config_file.as_deref().map_or_else(
                    || "environment".to_string(),
                    |p| p.display().to_string()
                )
            )
        })?;
        Ok(Self::bootstrap(config))
    }

    /// Wires the services for `config`.
    ///
    /// Without a resolvable data directory everything runs against an
    /// in-memory store and nothing outlives the process.
    pub fn bootstrap(config: DoremeConfig) -> Self {
        let store: Arc<dyn RecordStore> = match DoremePaths::from_config(&config) {
            Ok(paths) => {
                tracing::info!("[Bootstrap] Using data directory {:?}", paths.base_dir());
                Arc::new(JsonRecordStore::new(paths))
            }
            Err(e) => {
                tracing::warn!(
                    "[Bootstrap] {}; falling back to in-memory storage, data will not persist",
                    e
                );
                Arc::new(InMemoryRecordStore::new())
            }
        };
        Self::with_store(config, store)
    }

    /// Wires the services over an explicit store.
    pub fn with_store(config: DoremeConfig, store: Arc<dyn RecordStore>) -> Self {
        let feed = Arc::new(FeedSession::new(select_feed_provider(&config)));

        Self {
            conversations: Arc::new(ConversationService::new(
                store.clone(),
                config.reply_delay(),
            )),
            projects: Arc::new(ProjectService::new(store.clone())),
            matches: Arc::new(MatchTracker::new(store.clone())),
            onboarding: Arc::new(OnboardingService::new(store.clone())),
            feed,
            store,
            config,
        }
    }

    /// Starts a Find session over the built-in candidate pool.
    pub async fn find_session(&self) -> FindSession {
        FindSession::open(self.matches.clone(), default_musicians()).await
    }
}

/// `config.toml` in the data directory `config` resolves to, if any.
fn default_config_file(config: &DoremeConfig) -> Option<PathBuf> {
    DoremePaths::from_config(config)
        .ok()
        .map(|paths| paths.config_file())
}
