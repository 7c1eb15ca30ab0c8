use serde::{Deserialize, Serialize};

use crate::matching::DecisionMap;
use crate::musician::{Ability, Musician};

/// Active filter predicates. A candidate must satisfy all of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryFilters {
    /// Candidate has at least one of these. Empty matches everyone.
    #[serde(default)]
    pub abilities: Vec<Ability>,
    /// Candidate is looking for this ability. `None` matches everyone.
    #[serde(default)]
    pub looking_for: Option<Ability>,
    /// Case-insensitive substring of the candidate's location. Empty matches everyone.
    #[serde(default)]
    pub location: String,
}

impl DiscoveryFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_abilities(mut self, abilities: impl IntoIterator<Item = Ability>) -> Self {
        self.abilities = Vec::new();
        for ability in abilities {
            if !self.abilities.contains(&ability) {
                self.abilities.push(ability);
            }
        }
        self
    }

    pub fn with_looking_for(mut self, ability: Option<Ability>) -> Self {
        self.looking_for = ability;
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Adds the ability if absent, removes it otherwise.
    pub fn toggle_ability(&mut self, ability: Ability) {
        if let Some(pos) = self.abilities.iter().position(|a| *a == ability) {
            self.abilities.remove(pos);
        } else {
            self.abilities.push(ability);
        }
    }

    /// True when any predicate narrows the pool.
    pub fn is_active(&self) -> bool {
        !self.abilities.is_empty() || self.looking_for.is_some() || !self.location.is_empty()
    }

    pub fn matches(&self, musician: &Musician) -> bool {
        self.ability_matches(musician)
            && self.looking_for_matches(musician)
            && self.location_matches(musician)
    }

    fn ability_matches(&self, musician: &Musician) -> bool {
        self.abilities.is_empty() || self.abilities.iter().any(|a| musician.has_ability(*a))
    }

    fn looking_for_matches(&self, musician: &Musician) -> bool {
        match self.looking_for {
            Some(ability) => musician.is_looking_for(ability),
            None => true,
        }
    }

    fn location_matches(&self, musician: &Musician) -> bool {
        self.location.is_empty()
            || musician
                .location
                .to_lowercase()
                .contains(&self.location.to_lowercase())
    }
}

/// Undecided candidates that pass `filters`, in pool order.
pub fn visible_candidates<'a>(
    pool: &'a [Musician],
    decisions: &DecisionMap,
    filters: &DiscoveryFilters,
) -> Vec<&'a Musician> {
    pool.iter()
        .filter(|m| !decisions.contains(&m.id))
        .filter(|m| filters.matches(m))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::Decision;
    use crate::musician::default_musicians;

    fn candidate(id: &str, abilities: &[Ability], looking_for: &[Ability], location: &str) -> Musician {
        Musician {
            id: id.to_string(),
            name: id.to_uppercase(),
            handle: format!("@{id}"),
            location: location.to_string(),
            abilities: abilities.to_vec(),
            looking_for: looking_for.to_vec(),
            bio: None,
            portfolio: None,
            avatar_url: None,
        }
    }

    fn ids(list: &[&Musician]) -> Vec<String> {
        list.iter().map(|m| m.id.clone()).collect()
    }

    #[test]
    fn test_no_filters_shows_whole_pool() {
        let pool = default_musicians();
        let visible = visible_candidates(&pool, &DecisionMap::new(), &DiscoveryFilters::new());
        assert_eq!(visible.len(), pool.len());
    }

    #[test]
    fn test_ability_filter_is_or_within_set() {
        let pool = vec![
            candidate("a", &[Ability::Producer], &[], "LA"),
            candidate("b", &[Ability::Singer], &[], "LA"),
            candidate("c", &[Ability::Writer], &[], "LA"),
        ];
        let filters = DiscoveryFilters::new().with_abilities([Ability::Singer, Ability::Producer]);
        let visible = visible_candidates(&pool, &DecisionMap::new(), &filters);
        assert_eq!(ids(&visible), vec!["a", "b"]);
    }

    #[test]
    fn test_looking_for_filter() {
        let pool = vec![
            candidate("a", &[Ability::Producer], &[Ability::Singer], "LA"),
            candidate("b", &[Ability::Singer], &[Ability::Producer], "LA"),
        ];
        let filters = DiscoveryFilters::new().with_looking_for(Some(Ability::Producer));
        let visible = visible_candidates(&pool, &DecisionMap::new(), &filters);
        assert_eq!(ids(&visible), vec!["b"]);
    }

    #[test]
    fn test_location_filter_is_case_insensitive_substring() {
        let pool = vec![
            candidate("a", &[Ability::Producer], &[], "Austin, TX"),
            candidate("b", &[Ability::Producer], &[], "Los Angeles, CA"),
        ];
        let filters = DiscoveryFilters::new().with_location("aUsT");
        let visible = visible_candidates(&pool, &DecisionMap::new(), &filters);
        assert_eq!(ids(&visible), vec!["a"]);
    }

    #[test]
    fn test_decided_candidates_are_hidden() {
        let pool = vec![
            candidate("a", &[Ability::Producer], &[], "LA"),
            candidate("b", &[Ability::Singer], &[], "LA"),
        ];
        let mut decisions = DecisionMap::new();
        decisions.record("a", Decision::Passed);
        let visible = visible_candidates(&pool, &decisions, &DiscoveryFilters::new());
        assert_eq!(ids(&visible), vec!["b"]);
    }

    #[test]
    fn test_toggle_ability() {
        let mut filters = DiscoveryFilters::new();
        filters.toggle_ability(Ability::Writer);
        filters.toggle_ability(Ability::Singer);
        assert_eq!(filters.abilities, vec![Ability::Writer, Ability::Singer]);
        filters.toggle_ability(Ability::Writer);
        assert_eq!(filters.abilities, vec![Ability::Singer]);
        assert!(filters.is_active());
    }

    #[test]
    fn test_with_abilities_dedups() {
        let filters = DiscoveryFilters::new().with_abilities([Ability::Writer, Ability::Writer]);
        assert_eq!(filters.abilities, vec![Ability::Writer]);
    }
}
