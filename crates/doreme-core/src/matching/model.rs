use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Verdict on a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Liked,
    Passed,
}

/// Mapping from candidate id to its decision.
///
/// Serialized as a flat JSON object: `{"m1": "liked", "m2": "passed"}`.
/// At most one entry per candidate; recording again overwrites.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecisionMap(BTreeMap<String, Decision>);

impl DecisionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, candidate_id: &str) -> Option<Decision> {
        self.0.get(candidate_id).copied()
    }

    pub fn contains(&self, candidate_id: &str) -> bool {
        self.0.contains_key(candidate_id)
    }

    /// Sets the decision unconditionally, returning the previous one if any.
    pub fn record(&mut self, candidate_id: impl Into<String>, decision: Decision) -> Option<Decision> {
        self.0.insert(candidate_id.into(), decision)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Decision)> {
        self.0.iter().map(|(id, d)| (id.as_str(), *d))
    }

    /// Ids of every liked candidate, sorted.
    pub fn liked(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, d)| *d == Decision::Liked)
            .map(|(id, _)| id)
            .collect()
    }
}

impl FromIterator<(String, Decision)> for DecisionMap {
    fn from_iter<I: IntoIterator<Item = (String, Decision)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
