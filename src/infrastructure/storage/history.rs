// In-memory conversation history using DashMap
use crate::domain::error::AgriError;
use crate::domain::model::Exchange;
use crate::domain::traits::ConversationStore;
use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Default)]
struct UserHistory {
    entries: VecDeque<Exchange>,
    last_write: u64,
}

/// Thread-safe per-user history.
///
/// Keeps the newest `max_per_user` exchanges per user and at most `max_users`
/// users; the least recently written user is evicted first.
pub struct MemoryHistory {
    map: DashMap<String, UserHistory>,
    max_per_user: usize,
    max_users: usize,
    writes: AtomicU64,
}

impl MemoryHistory {
    pub fn new(max_per_user: usize, max_users: usize) -> Self {
        Self {
            map: DashMap::new(),
            max_per_user: max_per_user.max(1),
            max_users: max_users.max(1),
            writes: AtomicU64::new(0),
        }
    }

    /// Number of users with stored history.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    fn evict_oldest(&self) {
        // Guards from iter() must be dropped before remove() to avoid a shard deadlock.
        let oldest = self
            .map
            .iter()
            .min_by_key(|entry| entry.value().last_write)
            .map(|entry| entry.key().clone());

        if let Some(user_id) = oldest {
            self.map.remove(&user_id);
            tracing::debug!(%user_id, "evicted conversation history");
        }
    }
}

#[async_trait]
impl ConversationStore for MemoryHistory {
    async fn append(&self, user_id: &str, exchange: Exchange) -> Result<(), AgriError> {
        if !self.map.contains_key(user_id) {
            while self.map.len() >= self.max_users {
                self.evict_oldest();
            }
        }

        let write = self.writes.fetch_add(1, Ordering::Relaxed);
        let mut history = self.map.entry(user_id.to_string()).or_default();
        history.last_write = write;
        history.entries.push_back(exchange);
        while history.entries.len() > self.max_per_user {
            history.entries.pop_front();
        }
        Ok(())
    }

    async fn list(&self, user_id: &str) -> Result<Vec<Exchange>, AgriError> {
        Ok(self
            .map
            .get(user_id)
            .map(|history| history.entries.iter().cloned().collect())
            .unwrap_or_default())
    }

    async fn clear(&self, user_id: &str) -> Result<usize, AgriError> {
        Ok(self
            .map
            .remove(user_id)
            .map(|(_, history)| history.entries.len())
            .unwrap_or(0))
    }
}
