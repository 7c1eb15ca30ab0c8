use std::sync::Arc;

use doreme_core::error::Result;
use doreme_core::store::RecordStore;

/// First-run flag.
pub struct OnboardingService {
    store: Arc<dyn RecordStore>,
}

impl OnboardingService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Whether onboarding was completed. Unreadable data counts as not onboarded.
    pub async fn is_onboarded(&self) -> bool {
        self.store.is_onboarded().await.unwrap_or_else(|e| {
            tracing::warn!("[Onboarding] Stored flag unreadable: {}", e);
            false
        })
    }

    pub async fn complete(&self) -> Result<()> {
        self.store.mark_onboarded().await?;
        tracing::info!("[Onboarding] Completed");
        Ok(())
    }
}
