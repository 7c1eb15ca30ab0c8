use crate::matching::{Decision, DecisionMap};
use crate::musician::{Ability, Musician};

use super::filter::{DiscoveryFilters, visible_candidates};

/// What the discovery card area should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryView<'a> {
    /// Nobody is visible: empty pool, everyone decided, or filters exclude everyone.
    NoCandidates,
    /// Candidates are visible but the cursor is past the last one.
    Exhausted { total: usize },
    /// A candidate is on screen. `position` is 1-based.
    Current {
        musician: &'a Musician,
        position: usize,
        total: usize,
    },
}

/// Result of deciding on the current candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionOutcome {
    pub candidate_id: String,
    pub candidate_name: String,
    pub decision: Decision,
}

impl DecisionOutcome {
    /// A like is reported to the user as a match.
    pub fn is_match(&self) -> bool {
        self.decision == Decision::Liked
    }
}

/// Cursor-based navigation over the visible list.
///
/// Cursor rules:
/// - any filter change resets the cursor to 0
/// - [`Discovery::advance`] moves forward by one and never past the last visible index
/// - [`Discovery::decide`] records the decision and leaves the cursor where it is;
///   the decided candidate drops out of the recomputed list, so the same index now
///   addresses its successor. Deciding the last visible candidate leaves the cursor
///   past the end ([`DiscoveryView::Exhausted`]).
#[derive(Debug, Clone)]
pub struct Discovery {
    pool: Vec<Musician>,
    decisions: DecisionMap,
    filters: DiscoveryFilters,
    cursor: usize,
}

impl Discovery {
    pub fn new(pool: Vec<Musician>, decisions: DecisionMap) -> Self {
        Self {
            pool,
            decisions,
            filters: DiscoveryFilters::default(),
            cursor: 0,
        }
    }

    pub fn pool(&self) -> &[Musician] {
        &self.pool
    }

    pub fn decisions(&self) -> &DecisionMap {
        &self.decisions
    }

    /// Replaces the working copy of the decision map (e.g. after a reload).
    pub fn set_decisions(&mut self, decisions: DecisionMap) {
        self.decisions = decisions;
    }

    pub fn filters(&self) -> &DiscoveryFilters {
        &self.filters
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn visible(&self) -> Vec<&Musician> {
        visible_candidates(&self.pool, &self.decisions, &self.filters)
    }

    pub fn current(&self) -> Option<&Musician> {
        self.visible().get(self.cursor).copied()
    }

    pub fn view(&self) -> DiscoveryView<'_> {
        let visible = self.visible();
        let total = visible.len();
        match visible.get(self.cursor).copied() {
            Some(musician) => DiscoveryView::Current {
                musician,
                position: self.cursor + 1,
                total,
            },
            None if total == 0 => DiscoveryView::NoCandidates,
            None => DiscoveryView::Exhausted { total },
        }
    }

    /// Moves to the next visible candidate; a no-op at the last one.
    pub fn advance(&mut self) {
        let len = self.visible().len();
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    /// Records `decision` for the current candidate.
    ///
    /// Returns `None` without touching anything when there is no current candidate.
    pub fn decide(&mut self, decision: Decision) -> Option<DecisionOutcome> {
        let current = self.current()?;
        let outcome = DecisionOutcome {
            candidate_id: current.id.clone(),
            candidate_name: current.name.clone(),
            decision,
        };
        self.decisions.record(outcome.candidate_id.clone(), decision);
        Some(outcome)
    }

    pub fn set_filters(&mut self, filters: DiscoveryFilters) {
        self.filters = filters;
        self.cursor = 0;
    }

    pub fn toggle_ability(&mut self, ability: Ability) {
        self.filters.toggle_ability(ability);
        self.cursor = 0;
    }

    pub fn set_abilities(&mut self, abilities: impl IntoIterator<Item = Ability>) {
        self.filters = std::mem::take(&mut self.filters).with_abilities(abilities);
        self.cursor = 0;
    }

    pub fn set_looking_for(&mut self, ability: Option<Ability>) {
        self.filters.looking_for = ability;
        self.cursor = 0;
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.filters.location = location.into();
        self.cursor = 0;
    }

    pub fn clear_filters(&mut self) {
        self.filters = DiscoveryFilters::default();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: &str, abilities: &[Ability]) -> Musician {
        Musician {
            id: id.to_string(),
            name: id.to_uppercase(),
            handle: format!("@{id}"),
            location: "Denver, CO".to_string(),
            abilities: abilities.to_vec(),
            looking_for: vec![],
            bio: None,
            portfolio: None,
            avatar_url: None,
        }
    }

    fn pool_of(ids: &[&str]) -> Vec<Musician> {
        ids.iter().map(|id| candidate(id, &[Ability::Musician])).collect()
    }

    fn current_id(discovery: &Discovery) -> Option<String> {
        discovery.current().map(|m| m.id.clone())
    }

    #[test]
    fn test_empty_pool_has_no_candidates() {
        let discovery = Discovery::new(vec![], DecisionMap::new());
        assert_eq!(discovery.view(), DiscoveryView::NoCandidates);
        assert!(discovery.current().is_none());
    }

    #[test]
    fn test_advance_clamps_at_last() {
        let mut discovery = Discovery::new(pool_of(&["a", "b"]), DecisionMap::new());
        discovery.advance();
        discovery.advance();
        discovery.advance();
        assert_eq!(discovery.cursor(), 1);
        assert_eq!(current_id(&discovery).as_deref(), Some("b"));
    }

    #[test]
    fn test_advance_on_empty_is_noop() {
        let mut discovery = Discovery::new(vec![], DecisionMap::new());
        discovery.advance();
        assert_eq!(discovery.cursor(), 0);
    }

    #[test]
    fn test_decide_moves_to_successor_without_skipping() {
        let mut discovery = Discovery::new(pool_of(&["a", "b", "c"]), DecisionMap::new());

        let outcome = discovery.decide(Decision::Passed).unwrap();
        assert_eq!(outcome.candidate_id, "a");
        assert_eq!(current_id(&discovery).as_deref(), Some("b"));

        discovery.decide(Decision::Liked);
        assert_eq!(current_id(&discovery).as_deref(), Some("c"));
    }

    #[test]
    fn test_deciding_last_candidate_exhausts() {
        let mut discovery = Discovery::new(pool_of(&["a", "b", "c"]), DecisionMap::new());
        discovery.advance();
        discovery.advance();
        assert_eq!(current_id(&discovery).as_deref(), Some("c"));

        discovery.decide(Decision::Passed);

        assert_eq!(discovery.view(), DiscoveryView::Exhausted { total: 2 });
        assert!(discovery.current().is_none());
        assert!(discovery.decide(Decision::Liked).is_none());
    }

    #[test]
    fn test_deciding_everyone_leaves_no_candidates() {
        let mut discovery = Discovery::new(pool_of(&["a", "b"]), DecisionMap::new());
        discovery.decide(Decision::Liked);
        discovery.decide(Decision::Passed);
        assert_eq!(discovery.view(), DiscoveryView::NoCandidates);
        assert_eq!(discovery.decisions().len(), 2);
    }

    #[test]
    fn test_filter_change_resets_cursor() {
        let mut discovery = Discovery::new(pool_of(&["a", "b", "c"]), DecisionMap::new());
        discovery.advance();
        discovery.advance();
        discovery.set_location("denver");
        assert_eq!(discovery.cursor(), 0);

        discovery.advance();
        discovery.toggle_ability(Ability::Musician);
        assert_eq!(discovery.cursor(), 0);

        discovery.advance();
        discovery.set_looking_for(Some(Ability::Singer));
        assert_eq!(discovery.cursor(), 0);
        assert_eq!(discovery.view(), DiscoveryView::NoCandidates);

        discovery.clear_filters();
        assert!(!discovery.filters().is_active());
        assert_eq!(discovery.visible().len(), 3);
    }

    #[test]
    fn test_view_reports_position() {
        let mut discovery = Discovery::new(pool_of(&["a", "b", "c"]), DecisionMap::new());
        discovery.advance();
        match discovery.view() {
            DiscoveryView::Current {
                musician,
                position,
                total,
            } => {
                assert_eq!(musician.id, "b");
                assert_eq!(position, 2);
                assert_eq!(total, 3);
            }
            other => panic!("unexpected view: {other:?}"),
        }
    }

    #[test]
    fn test_singer_scenario() {
        let pool = vec![
            candidate("A", &[Ability::Producer]),
            candidate("B", &[Ability::Singer]),
        ];
        let mut discovery = Discovery::new(pool, DecisionMap::new());
        discovery.set_abilities([Ability::Singer]);
        let visible: Vec<_> = discovery.visible().iter().map(|m| m.id.clone()).collect();
        assert_eq!(visible, vec!["B"]);

        let outcome = discovery.decide(Decision::Passed).unwrap();
        assert!(!outcome.is_match());
        assert!(discovery.visible().is_empty());
    }
}
