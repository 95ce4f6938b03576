//! Per-conversation word lists.
//!
//! `/last` stores the ids it displayed so that `/mem` and `/del` can refer to
//! words by their 1-based position in that list.

use async_trait::async_trait;
use moka::sync::Cache;
use std::sync::Arc;
use std::time::Duration;
use vocabulary_types::WordId;

/// Upper bound on conversations tracked at once
const MAX_CONVERSATIONS: u64 = 10_000;

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Replace the list shown in `conversation`
    async fn set(&self, conversation: &str, ids: Vec<WordId>);

    /// The list last shown in `conversation`, empty if there is none
    async fn get(&self, conversation: &str) -> Vec<WordId>;
}

/// In-process session store. Lists of conversations that stay idle longer
/// than the configured time are dropped.
pub struct MemorySessionStore {
    lists: Cache<String, Arc<Vec<WordId>>>,
}

impl MemorySessionStore {
    pub fn new(idle: Duration) -> Self {
        Self {
            lists: Cache::builder()
                .time_to_idle(idle)
                .max_capacity(MAX_CONVERSATIONS)
                .build(),
        }
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn set(&self, conversation: &str, ids: Vec<WordId>) {
        self.lists.insert(conversation.to_string(), Arc::new(ids));
    }

    async fn get(&self, conversation: &str) -> Vec<WordId> {
        self.lists
            .get(conversation)
            .map(|ids| ids.as_ref().clone())
            .unwrap_or_default()
    }
}
