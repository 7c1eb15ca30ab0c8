//! Feed search with a loading flag.
//!
//! Every search takes a ticket from a monotonically increasing counter. When a
//! response arrives, it is applied only if its ticket is still the newest one
//! issued; older responses are dropped so a slow stale search can never
//! overwrite fresher results. The loading flag belongs to the newest ticket
//! and is cleared when that search finishes or is cancelled.

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::RwLock;

use doreme_core::error::Result;
use doreme_core::feed::{FeedItem, FeedProvider};

#[derive(Debug, Default)]
struct Displayed {
    items: Vec<FeedItem>,
    query: String,
}

#[derive(Debug, Default)]
struct Tickets {
    latest: u64,
    loading: bool,
}

pub struct FeedSession {
    provider: Arc<dyn FeedProvider>,
    displayed: RwLock<Displayed>,
    tickets: Mutex<Tickets>,
}

/// Clears the loading flag on drop unless a newer search took over.
struct LoadingGuard<'a> {
    session: &'a FeedSession,
    ticket: u64,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        let mut tickets = self.session.tickets();
        if tickets.latest == self.ticket {
            tickets.loading = false;
        }
    }
}

impl FeedSession {
    pub fn new(provider: Arc<dyn FeedProvider>) -> Self {
        Self {
            provider,
            displayed: RwLock::new(Displayed::default()),
            tickets: Mutex::new(Tickets::default()),
        }
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Items currently on display.
    pub async fn items(&self) -> Vec<FeedItem> {
        self.displayed.read().await.items.clone()
    }

    /// Query that produced the displayed items.
    pub async fn query(&self) -> String {
        self.displayed.read().await.query.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.tickets().loading
    }

    /// Runs a search and displays its results unless a newer search was
    /// issued meanwhile. Returns whether the results were applied.
    pub async fn search(&self, query: &str) -> Result<bool> {
        let ticket = {
            let mut tickets = self.tickets();
            tickets.latest += 1;
            tickets.loading = true;
            tickets.latest
        };
        let _loading = LoadingGuard {
            session: self,
            ticket,
        };

        let result = self.provider.search(query).await;

        let mut displayed = self.displayed.write().await;
        if self.tickets().latest != ticket {
            tracing::debug!(
                "[FeedSession] Dropping stale results for '{}' (ticket {})",
                query,
                ticket
            );
            return Ok(false);
        }

        match result {
            Ok(items) => {
                tracing::debug!(
                    "[FeedSession] Showing {} items for '{}' via {}",
                    items.len(),
                    query,
                    self.provider.name()
                );
                displayed.items = items;
                displayed.query = query.to_string();
                Ok(true)
            }
            Err(e) => {
                tracing::warn!("[FeedSession] Search for '{}' failed: {}", query, e);
                Err(e)
            }
        }
    }

    /// Reloads the unfiltered feed.
    pub async fn refresh(&self) -> Result<bool> {
        self.search("").await
    }

    fn tickets(&self) -> MutexGuard<'_, Tickets> {
        self.tickets
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
