//! The swipe-style "Find" flow: discovery navigation backed by persisted decisions.

use std::sync::Arc;

use doreme_core::discovery::{DecisionOutcome, Discovery, DiscoveryFilters, DiscoveryView};
use doreme_core::error::Result;
use doreme_core::matching::Decision;
use doreme_core::musician::{Ability, Musician};

use crate::match_tracker::MatchTracker;

pub struct FindSession {
    discovery: Discovery,
    tracker: Arc<MatchTracker>,
}

impl FindSession {
    /// Opens a session over `pool`, hiding candidates already decided on.
    pub async fn open(tracker: Arc<MatchTracker>, pool: Vec<Musician>) -> Self {
        let decisions = tracker.decisions().await;
        tracing::debug!(
            "[FindSession] Opened with {} candidates, {} already decided",
            pool.len(),
            decisions.len()
        );
        Self {
            discovery: Discovery::new(pool, decisions),
            tracker,
        }
    }

    pub fn view(&self) -> DiscoveryView<'_> {
        self.discovery.view()
    }

    pub fn current(&self) -> Option<&Musician> {
        self.discovery.current()
    }

    pub fn visible(&self) -> Vec<&Musician> {
        self.discovery.visible()
    }

    pub fn filters(&self) -> &DiscoveryFilters {
        self.discovery.filters()
    }

    pub fn advance(&mut self) {
        self.discovery.advance();
    }

    /// Likes the current candidate. The outcome reports a match.
    pub async fn like(&mut self) -> Result<Option<DecisionOutcome>> {
        self.decide(Decision::Liked).await
    }

    pub async fn pass(&mut self) -> Result<Option<DecisionOutcome>> {
        self.decide(Decision::Passed).await
    }

    /// Persists first; the in-memory view only moves on once the store accepted it.
    async fn decide(&mut self, decision: Decision) -> Result<Option<DecisionOutcome>> {
        let Some(candidate_id) = self.discovery.current().map(|m| m.id.clone()) else {
            return Ok(None);
        };
        self.tracker.decide(&candidate_id, decision).await?;

        let outcome = self.discovery.decide(decision);
        if let Some(outcome) = &outcome
            && outcome.is_match()
        {
            tracing::info!("[FindSession] It's a match with {}", outcome.candidate_name);
        }
        Ok(outcome)
    }

    /// Re-reads decisions from the store (e.g. after another session wrote).
    pub async fn reload(&mut self) {
        let decisions = self.tracker.decisions().await;
        self.discovery.set_decisions(decisions);
    }

    pub fn set_filters(&mut self, filters: DiscoveryFilters) {
        self.discovery.set_filters(filters);
    }

    pub fn toggle_ability(&mut self, ability: Ability) {
        self.discovery.toggle_ability(ability);
    }

    pub fn set_abilities(&mut self, abilities: impl IntoIterator<Item = Ability>) {
        self.discovery.set_abilities(abilities);
    }

    pub fn set_looking_for(&mut self, ability: Option<Ability>) {
        self.discovery.set_looking_for(ability);
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.discovery.set_location(location);
    }

    pub fn clear_filters(&mut self) {
        self.discovery.clear_filters();
    }
}
