//! In-memory order store

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

use shop_agent_core::{Order, OrderStore, Result};

/// Per-user orders held in memory
#[derive(Default)]
pub struct MemoryOrderStore {
    orders: RwLock<HashMap<String, Vec<Order>>>,
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, user_id: impl Into<String>, order: Order) {
        self.orders
            .write()
            .entry(user_id.into())
            .or_default()
            .push(order);
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn find_order(&self, user_id: &str, order_id: &str) -> Result<Option<Order>> {
        let orders = self.orders.read();
        Ok(orders
            .get(user_id)
            .and_then(|list| list.iter().find(|o| o.order_id == order_id))
            .cloned())
    }
}
