//! Built-in candidate pool.
//!
//! The pool is static for a session; discovery never mutates it.

use super::model::{Ability, Musician, PortfolioItem};

fn musician(
    id: &str,
    name: &str,
    handle: &str,
    location: &str,
    abilities: &[Ability],
    looking_for: &[Ability],
    bio: &str,
) -> Musician {
    Musician {
        id: id.to_string(),
        name: name.to_string(),
        handle: handle.to_string(),
        location: location.to_string(),
        abilities: abilities.to_vec(),
        looking_for: looking_for.to_vec(),
        bio: Some(bio.to_string()),
        portfolio: None,
        avatar_url: None,
    }
}

/// Returns the default discovery pool in presentation order.
pub fn default_musicians() -> Vec<Musician> {
    use Ability::*;

    let mut pool = vec![
        musician(
            "m1",
            "Maya Chen",
            "@mayachen",
            "Los Angeles, CA",
            &[Singer, Writer],
            &[Producer],
            "R&B vocalist writing about late nights and long drives.",
        ),
        musician(
            "m2",
            "Jordan Brooks",
            "@jbrooksbeats",
            "Atlanta, GA",
            &[Producer],
            &[Singer, Writer],
            "Trap and neo-soul producer. 200+ beats in the vault.",
        ),
        musician(
            "m3",
            "Elena Ruiz",
            "@elenaruiz",
            "Austin, TX",
            &[Composer, Musician],
            &[Singer],
            "Classically trained pianist scoring indie films.",
        ),
        musician(
            "m4",
            "Sam Okafor",
            "@samokafor",
            "Brooklyn, NY",
            &[Musician],
            &[Producer, Composer],
            "Session bassist. Jazz by day, funk by night.",
        ),
        musician(
            "m5",
            "Lena Park",
            "@lenapark",
            "Seattle, WA",
            &[Writer],
            &[Singer, Musician],
            "Lyricist with a notebook full of unfinished choruses.",
        ),
        musician(
            "m6",
            "Marcus Hale",
            "@marcushale",
            "Nashville, TN",
            &[Singer, Musician],
            &[Writer],
            "Country-folk singer and guitarist looking for co-writers.",
        ),
        musician(
            "m7",
            "Aria Novak",
            "@arianovak",
            "San Francisco, CA",
            &[Producer, Composer],
            &[Singer],
            "Ambient electronic producer. Modular synths and field recordings.",
        ),
        musician(
            "m8",
            "Theo Grant",
            "@theogrant",
            "Chicago, IL",
            &[Writer, Singer],
            &[Producer, Musician],
            "Soul songwriter with a gospel background.",
        ),
    ];

    pool[1].portfolio = Some(vec![PortfolioItem {
        title: "Midnight Drive (beat tape)".to_string(),
        url: None,
        thumbnail_url: None,
    }]);
    pool[2].portfolio = Some(vec![PortfolioItem {
        title: "Short film score: Paper Boats".to_string(),
        url: None,
        thumbnail_url: None,
    }]);

    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let pool = default_musicians();
        let ids: HashSet<_> = pool.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids.len(), pool.len());
    }

    #[test]
    fn test_every_candidate_has_an_ability() {
        assert!(default_musicians().iter().all(|m| !m.abilities.is_empty()));
    }
}
