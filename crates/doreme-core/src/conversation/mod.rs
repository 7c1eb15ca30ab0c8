//! Direct-message conversation domain models.

mod model;
mod seed;

pub use model::{CONVERSATION_ID_PREFIX, Conversation, Message, Sender, conversation_id_for};
pub use seed::{CANNED_REPLIES, sample_conversations};
