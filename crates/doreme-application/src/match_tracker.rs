use std::sync::Arc;

use doreme_core::error::Result;
use doreme_core::matching::{Decision, DecisionMap};
use doreme_core::store::RecordStore;

/// Persists like/pass decisions keyed by candidate id.
pub struct MatchTracker {
    store: Arc<dyn RecordStore>,
}

impl MatchTracker {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Current decision map; unreadable data reads as no decisions.
    pub async fn decisions(&self) -> DecisionMap {
        match self.store.load_decisions().await {
            Ok(decisions) => decisions,
            Err(e) => {
                tracing::warn!("[MatchTracker] Stored decisions unreadable, ignoring: {}", e);
                DecisionMap::new()
            }
        }
    }

    /// Records (or overwrites) the decision for `candidate_id`.
    pub async fn decide(&self, candidate_id: &str, decision: Decision) -> Result<()> {
        let id = candidate_id.to_string();
        self.store
            .update_decisions(Box::new(move |decisions: &mut DecisionMap| {
                decisions.record(id, decision) != Some(decision)
            }))
            .await?;

        tracing::debug!("[MatchTracker] {} -> {:?}", candidate_id, decision);
        Ok(())
    }
}
