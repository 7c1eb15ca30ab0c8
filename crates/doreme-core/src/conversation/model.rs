use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::now_millis;

/// Prefix used when a conversation is opened from a musician's profile.
pub const CONVERSATION_ID_PREFIX: &str = "conv-";

/// Builds the conventional conversation id for a counterpart.
///
/// The counterpart is always stored explicitly on [`Conversation::musician_id`];
/// this id is never parsed back.
pub fn conversation_id_for(musician_id: &str) -> String {
    format!("{CONVERSATION_ID_PREFIX}{musician_id}")
}

/// Who wrote a message, from the local user's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Me,
    Them,
}

/// A single direct message. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub from: Sender,
    pub text: String,
    /// Creation time, Unix epoch milliseconds.
    pub time: i64,
}

impl Message {
    /// Creates a message stamped with the current time.
    pub fn new(from: Sender, text: impl Into<String>) -> Self {
        Self {
            id: format!("msg-{}", Uuid::new_v4()),
            from,
            text: text.into(),
            time: now_millis(),
        }
    }
}

/// A conversation with one counterpart. Messages are append-only and kept
/// in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    pub musician_id: String,
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl Conversation {
    pub fn new(id: impl Into<String>, musician_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            musician_id: musician_id.into(),
            messages: Vec::new(),
        }
    }

    /// Opens a conversation keyed by the `conv-<musician_id>` convention.
    pub fn with_musician(musician_id: impl Into<String>) -> Self {
        let musician_id = musician_id.into();
        Self::new(conversation_id_for(&musician_id), musician_id)
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}
