//! In-memory chat history store

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use shop_agent_core::{ChatExchange, HistoryStore, Result};

/// Chat exchanges held in memory, append order preserved
#[derive(Default)]
pub struct MemoryHistory {
    exchanges: RwLock<Vec<ChatExchange>>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.exchanges.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.exchanges.read().is_empty()
    }
}

#[async_trait]
impl HistoryStore for MemoryHistory {
    async fn append(&self, exchange: ChatExchange) -> Result<ChatExchange> {
        self.exchanges.write().push(exchange.clone());
        tracing::debug!(user_id = %exchange.user_id, id = %exchange.id, "exchange appended");
        Ok(exchange)
    }

    async fn list_recent(&self, user_id: &str, n: usize) -> Result<Vec<ChatExchange>> {
        let exchanges = self.exchanges.read();
        Ok(exchanges
            .iter()
            .rev()
            .filter(|e| e.user_id == user_id)
            .take(n)
            .cloned()
            .collect())
    }

    async fn list_all(&self, user_id: &str) -> Result<Vec<ChatExchange>> {
        let exchanges = self.exchanges.read();
        Ok(exchanges
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn delete_one(&self, user_id: &str, id: Uuid) -> Result<bool> {
        let mut exchanges = self.exchanges.write();
        let before = exchanges.len();
        exchanges.retain(|e| !(e.id == id && e.user_id == user_id));
        Ok(exchanges.len() < before)
    }

    async fn delete_all(&self, user_id: &str) -> Result<usize> {
        let mut exchanges = self.exchanges.write();
        let before = exchanges.len();
        exchanges.retain(|e| e.user_id != user_id);
        Ok(before - exchanges.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded() -> MemoryHistory {
        let store = MemoryHistory::new();
        for i in 0..7 {
            store
                .append(ChatExchange::new(
                    "alice",
                    format!("message {i}"),
                    format!("reply {i}"),
                ))
                .await
                .unwrap();
        }
        store
            .append(ChatExchange::new("bob", "other user", "reply"))
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_list_recent_newest_first() {
        let store = seeded().await;
        let recent = store.list_recent("alice", 5).await.unwrap();

        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].message, "message 6");
        assert_eq!(recent[4].message, "message 2");
        // Never leaks another user's exchanges
        assert!(recent.iter().all(|e| e.user_id == "alice"));
    }

    #[tokio::test]
    async fn test_list_all_oldest_first() {
        let store = seeded().await;
        let all = store.list_all("alice").await.unwrap();
        assert_eq!(all.len(), 7);
        assert_eq!(all[0].message, "message 0");
    }

    #[tokio::test]
    async fn test_delete_one_enforces_ownership() {
        let store = seeded().await;
        let alice_exchange = store.list_recent("alice", 1).await.unwrap().remove(0);

        // Wrong owner: refused
        assert!(!store.delete_one("bob", alice_exchange.id).await.unwrap());
        // Right owner: removed
        assert!(store.delete_one("alice", alice_exchange.id).await.unwrap());
        // Second delete is a no-op
        assert!(!store.delete_one("alice", alice_exchange.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_all_scoped() {
        let store = seeded().await;
        assert_eq!(store.delete_all("alice").await.unwrap(), 7);
        assert_eq!(store.list_all("alice").await.unwrap().len(), 0);
        assert_eq!(store.list_all("bob").await.unwrap().len(), 1);
    }
}
