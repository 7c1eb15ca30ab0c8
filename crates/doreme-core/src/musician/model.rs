use serde::{Deserialize, Serialize};
use std::fmt;

/// What a musician can do, or is looking for in a collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ability {
    Writer,
    Producer,
    Composer,
    Musician,
    Singer,
}

impl Ability {
    /// Every ability, in the order filter chips are presented.
    pub const ALL: [Ability; 5] = [
        Ability::Writer,
        Ability::Producer,
        Ability::Composer,
        Ability::Musician,
        Ability::Singer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Ability::Writer => "writer",
            Ability::Producer => "producer",
            Ability::Composer => "composer",
            Ability::Musician => "musician",
            Ability::Singer => "singer",
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single portfolio entry shown on a candidate card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

/// A musician profile eligible for discovery.
///
/// `id` is unique within a candidate pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Musician {
    pub id: String,
    pub name: String,
    pub handle: String,
    pub location: String,
    pub abilities: Vec<Ability>,
    /// Abilities this musician wants in a collaborator.
    pub looking_for: Vec<Ability>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<Vec<PortfolioItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl Musician {
    pub fn has_ability(&self, ability: Ability) -> bool {
        self.abilities.contains(&ability)
    }

    pub fn is_looking_for(&self, ability: Ability) -> bool {
        self.looking_for.contains(&ability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ability_serializes_lowercase() {
        let json = serde_json::to_string(&vec![Ability::Producer, Ability::Singer]).unwrap();
        assert_eq!(json, r#"["producer","singer"]"#);
    }

    #[test]
    fn test_musician_camel_case_fields() {
        let json = r#"{
            "id": "m1",
            "name": "Ana",
            "handle": "@ana",
            "location": "Austin, TX",
            "abilities": ["singer"],
            "lookingFor": ["producer"]
        }"#;
        let musician: Musician = serde_json::from_str(json).unwrap();
        assert!(musician.has_ability(Ability::Singer));
        assert!(musician.is_looking_for(Ability::Producer));
        assert!(musician.bio.is_none());
        assert!(musician.portfolio.is_none());
    }
}
