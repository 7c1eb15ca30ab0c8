//! Direct-message use cases.
//!
//! Every mutation goes through [`RecordStore::update_conversations`], so
//! concurrent appends never drop each other's messages.

use std::sync::Arc;
use std::time::Duration;

use rand::seq::SliceRandom;

use doreme_core::DoremeError;
use doreme_core::conversation::{
    CANNED_REPLIES, Conversation, Message, Sender, conversation_id_for, sample_conversations,
};
use doreme_core::error::Result;
use doreme_core::store::RecordStore;

pub struct ConversationService {
    store: Arc<dyn RecordStore>,
    reply_delay: Duration,
}

impl ConversationService {
    pub fn new(store: Arc<dyn RecordStore>, reply_delay: Duration) -> Self {
        Self { store, reply_delay }
    }

    /// Returns all conversations, seeding the samples into an empty store.
    ///
    /// Unreadable data is shown as an empty list and left untouched on disk.
    pub async fn list(&self) -> Vec<Conversation> {
        let seeded = self
            .store
            .update_conversations(Box::new(|conversations: &mut Vec<Conversation>| {
                if !conversations.is_empty() {
                    return false;
                }
                *conversations = sample_conversations();
                true
            }))
            .await;

        seeded.unwrap_or_else(|e| {
            tracing::warn!(
                "[ConversationService] Stored conversations unreadable, showing none: {}",
                e
            );
            Vec::new()
        })
    }

    /// Looks a conversation up without seeding anything.
    pub async fn find(&self, conversation_id: &str) -> Option<Conversation> {
        match self.store.load_conversations().await {
            Ok(conversations) => conversations.into_iter().find(|c| c.id == conversation_id),
            Err(e) => {
                tracing::warn!("[ConversationService] Stored conversations unreadable: {}", e);
                None
            }
        }
    }

    /// Appends `message` to the conversation, creating it for `counterpart`
    /// when it does not exist yet. Returns the updated conversation.
    pub async fn append(
        &self,
        conversation_id: &str,
        counterpart: &str,
        message: Message,
    ) -> Result<Conversation> {
        let id = conversation_id.to_string();
        let counterpart = counterpart.to_string();

        let conversations = self
            .store
            .update_conversations(Box::new(move |conversations: &mut Vec<Conversation>| {
                let index = match conversations.iter().position(|c| c.id == id) {
                    Some(index) => index,
                    None => {
                        tracing::debug!(
                            "[ConversationService] Creating conversation {} with {}",
                            id,
                            counterpart
                        );
                        conversations.push(Conversation::new(id, counterpart));
                        conversations.len() - 1
                    }
                };
                conversations[index].messages.push(message);
                true
            }))
            .await?;

        find_stored(conversations, conversation_id)
    }

    /// Sends `text` as `sender`. Blank text is ignored and yields `None`.
    pub async fn send(
        &self,
        conversation_id: &str,
        counterpart: &str,
        text: &str,
        sender: Sender,
    ) -> Result<Option<Message>> {
        if text.trim().is_empty() {
            tracing::debug!("[ConversationService] Ignoring empty message");
            return Ok(None);
        }
        let message = Message::new(sender, text);
        self.append(conversation_id, counterpart, message.clone())
            .await?;
        Ok(Some(message))
    }

    /// Opens (or returns the existing) `conv-<musician_id>` conversation.
    pub async fn start_conversation(&self, musician_id: &str) -> Result<Conversation> {
        let id = conversation_id_for(musician_id);
        let fresh = Conversation::with_musician(musician_id);

        let conversations = self
            .store
            .update_conversations(Box::new(move |conversations: &mut Vec<Conversation>| {
                if conversations.iter().any(|c| c.id == fresh.id) {
                    return false;
                }
                conversations.push(fresh);
                true
            }))
            .await?;

        tracing::debug!("[ConversationService] Opened conversation {}", id);
        find_stored(conversations, &id)
    }

    /// Waits for the reply delay, then appends a canned reply from the counterpart.
    pub async fn simulate_reply(&self, conversation_id: &str, counterpart: &str) -> Result<Message> {
        tokio::time::sleep(self.reply_delay).await;

        let text = {
            let mut rng = rand::thread_rng();
            CANNED_REPLIES
                .choose(&mut rng)
                .copied()
                .unwrap_or(CANNED_REPLIES[0])
        };
        let message = Message::new(Sender::Them, text);
        self.append(conversation_id, counterpart, message.clone())
            .await?;
        Ok(message)
    }
}

fn find_stored(conversations: Vec<Conversation>, conversation_id: &str) -> Result<Conversation> {
    conversations
        .into_iter()
        .find(|c| c.id == conversation_id)
        .ok_or_else(|| {
            DoremeError::internal(format!("Conversation {} missing after write", conversation_id))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use doreme_infrastructure::{InMemoryRecordStore, JsonRecordStore};
    use tempfile::TempDir;

    fn service() -> (ConversationService, Arc<dyn RecordStore>) {
        let store: Arc<dyn RecordStore> = Arc::new(InMemoryRecordStore::new());
        (
            ConversationService::new(store.clone(), Duration::from_millis(1500)),
            store,
        )
    }

    #[tokio::test]
    async fn test_list_seeds_empty_store() {
        let (service, store) = service();

        let listed = service.list().await;
        assert_eq!(listed.len(), 2);
        assert_eq!(store.load_conversations().await.unwrap(), listed);

        // A second call reads back rather than reseeding.
        assert_eq!(service.list().await, listed);
    }

    #[tokio::test]
    async fn test_find_does_not_seed() {
        let (service, store) = service();

        assert!(service.find("conv-zzz").await.is_none());
        assert!(store.load_conversations().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_appends_keep_every_message() {
        let (service, _) = service();
        let service = Arc::new(service);

        let tasks: Vec<_> = (0..10)
            .map(|i| {
                let service = service.clone();
                tokio::spawn(async move {
                    service
                        .send("conv-m2", "m2", &format!("line {i}"), Sender::Me)
                        .await
                        .unwrap()
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }

        let conversation = service.find("conv-m2").await.unwrap();
        assert_eq!(conversation.messages.len(), 10);
    }

    #[tokio::test]
    async fn test_append_creates_with_explicit_counterpart() {
        let (service, _) = service();
        let message = Message::new(Sender::Me, "hi");

        let conversation = service.append("chat-42", "m7", message.clone()).await.unwrap();

        assert_eq!(conversation.id, "chat-42");
        assert_eq!(conversation.musician_id, "m7");
        assert_eq!(conversation.messages, vec![message]);
    }

    #[tokio::test]
    async fn test_send_blank_is_noop() {
        let (service, store) = service();
        let sent = service.send("conv-m2", "m2", "  \n\t", Sender::Me).await.unwrap();

        assert!(sent.is_none());
        assert!(store.load_conversations().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_start_conversation_is_idempotent() {
        let (service, store) = service();

        let first = service.start_conversation("m5").await.unwrap();
        service.send(&first.id, "m5", "hello", Sender::Me).await.unwrap();
        let second = service.start_conversation("m5").await.unwrap();

        assert_eq!(first.id, "conv-m5");
        assert_eq!(second.messages.len(), 1);
        assert_eq!(store.load_conversations().await.unwrap().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulate_reply_appends_canned_text() {
        let (service, _) = service();
        service.start_conversation("m1").await.unwrap();

        let reply = service.simulate_reply("conv-m1", "m1").await.unwrap();

        assert_eq!(reply.from, Sender::Them);
        assert!(CANNED_REPLIES.contains(&reply.text.as_str()));
        let conversation = service.find("conv-m1").await.unwrap();
        assert_eq!(conversation.last_message(), Some(&reply));
    }

    #[tokio::test]
    async fn test_malformed_data_degrades_on_read_and_fails_on_write() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("doreme_conversations.json"), "{not json").unwrap();
        let store: Arc<dyn RecordStore> = Arc::new(JsonRecordStore::with_base_dir(dir.path()));
        let service = ConversationService::new(store, Duration::ZERO);

        assert!(service.list().await.is_empty());

        let err = service
            .send("conv-m1", "m1", "hello", Sender::Me)
            .await
            .unwrap_err();
        assert!(err.is_serialization());

        let raw = std::fs::read_to_string(dir.path().join("doreme_conversations.json")).unwrap();
        assert_eq!(raw, "{not json");
    }
}
