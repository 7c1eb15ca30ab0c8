//! Static feed content used when no remote provider is available.

use super::model::FeedItem;

fn item(
    id: &str,
    creator_name: &str,
    handle: &str,
    location: &str,
    title: &str,
    description: &str,
    tags: &[&str],
) -> FeedItem {
    FeedItem {
        id: id.to_string(),
        creator_name: creator_name.to_string(),
        handle: handle.to_string(),
        location: Some(location.to_string()),
        title: title.to_string(),
        description: Some(description.to_string()),
        video_url: None,
        thumbnail_url: None,
        tags: Some(tags.iter().map(|t| t.to_string()).collect()),
    }
}

/// The fixed fallback list, in display order.
pub fn fallback_feed_items() -> Vec<FeedItem> {
    vec![
        item(
            "feed-1",
            "Maya Chen",
            "@mayachen",
            "Los Angeles, CA",
            "Late Night Sessions: acoustic R&B cover",
            "Stripped-down take recorded in one pass.",
            &["r&b", "acoustic", "cover"],
        ),
        item(
            "feed-2",
            "Sam Okafor",
            "@samokafor",
            "Brooklyn, NY",
            "Walking bass lines for beginners",
            "Five jazz standards and how to outline the changes.",
            &["jazz", "bass", "tutorial"],
        ),
        item(
            "feed-3",
            "Aria Novak",
            "@arianovak",
            "San Francisco, CA",
            "Modular synth ambient jam",
            "Forty minutes of generative patches and tape loops.",
            &["ambient", "electronic", "synth"],
        ),
        item(
            "feed-4",
            "Jordan Brooks",
            "@jbrooksbeats",
            "Atlanta, GA",
            "Making a neo-soul beat from scratch",
            "Chord voicings, drum swing and a Rhodes sample.",
            &["production", "neo-soul", "beats"],
        ),
        item(
            "feed-5",
            "Marcus Hale",
            "@marcushale",
            "Nashville, TN",
            "Songwriting round: three chords and the truth",
            "Live from a writers' night, with a little jazz detour at the bridge.",
            &["country", "songwriting", "live"],
        ),
        item(
            "feed-6",
            "Elena Ruiz",
            "@elenaruiz",
            "Austin, TX",
            "Scoring a short film with solo piano",
            "How the main theme grew out of a voice memo.",
            &["film", "piano", "composition"],
        ),
    ]
}

/// Items whose title, description or any tag contains `query`, case-insensitively.
///
/// An empty query returns every item.
pub fn filter_feed_items(items: Vec<FeedItem>, query: &str) -> Vec<FeedItem> {
    if query.is_empty() {
        return items;
    }
    let needle = query.to_lowercase();
    items
        .into_iter()
        .filter(|item| item.matches_lowercase(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_returns_everything() {
        let all = fallback_feed_items();
        assert_eq!(filter_feed_items(all.clone(), ""), all);
    }

    #[test]
    fn test_query_matches_title_description_and_tags() {
        let hits = filter_feed_items(fallback_feed_items(), "JAZZ");
        let ids: Vec<_> = hits.iter().map(|i| i.id.as_str()).collect();
        // feed-2 matches on description and tag, feed-5 on description only
        assert_eq!(ids, vec!["feed-2", "feed-5"]);
    }

    #[test]
    fn test_query_without_hits() {
        assert!(filter_feed_items(fallback_feed_items(), "polka").is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let items = fallback_feed_items();
        let mut ids: Vec<_> = items.iter().map(|i| i.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), items.len());
    }
}
