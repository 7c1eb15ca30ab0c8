use super::model::{Conversation, Message, Sender};
use crate::now_millis;

/// Replies used when simulating the counterpart answering.
pub const CANNED_REPLIES: [&str; 5] = [
    "That sounds great!",
    "I'm interested! Tell me more.",
    "Let me check my schedule and get back to you.",
    "Love the idea. When can we start?",
    "I'll send over some samples soon.",
];

const MINUTE_MS: i64 = 60_000;

fn message(id: &str, from: Sender, text: &str, time: i64) -> Message {
    Message {
        id: id.to_string(),
        from,
        text: text.to_string(),
        time,
    }
}

/// Conversations written to an empty store on first visit to messages.
pub fn sample_conversations() -> Vec<Conversation> {
    let now = now_millis();

    let mut maya = Conversation::with_musician("m1");
    maya.messages = vec![
        message(
            "msg-seed-1",
            Sender::Them,
            "Hey! Loved your last beat. Want to work on something together?",
            now - 90 * MINUTE_MS,
        ),
        message(
            "msg-seed-2",
            Sender::Me,
            "Absolutely, I have a hook that needs a voice.",
            now - 75 * MINUTE_MS,
        ),
    ];

    let mut elena = Conversation::with_musician("m3");
    elena.messages = vec![message(
        "msg-seed-3",
        Sender::Them,
        "Are you open to scoring a short film next month?",
        now - 26 * 60 * MINUTE_MS,
    )];

    vec![maya, elena]
}
