//! Store traits consumed by the engine
//!
//! Every method is a single awaited I/O call returning a fresh snapshot.
//! Implementations own timeouts and retries; the engine treats any `Err`
//! as an external failure and degrades to an apologetic reply.

use async_trait::async_trait;
use uuid::Uuid;

use crate::{ChatExchange, FaqEntry, Order, Product, ProductFilter, Result, SocialLink};

/// Product catalog lookups
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Products matching the filter, capped at `limit`
    async fn find_products(&self, filter: &ProductFilter, limit: usize) -> Result<Vec<Product>>;

    /// Popular products used as suggestions when a search comes back empty
    async fn find_popular(&self, limit: usize) -> Result<Vec<Product>>;
}

/// FAQ snapshots
#[async_trait]
pub trait FaqStore: Send + Sync {
    /// The full FAQ list, fetched fresh per request
    async fn list_faqs(&self) -> Result<Vec<FaqEntry>>;
}

/// Storefront social media links
#[async_trait]
pub trait SocialLinkStore: Send + Sync {
    async fn list_links(&self) -> Result<Vec<SocialLink>>;
}

/// Per-user order lookup
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// The user's order with the given id, if any
    ///
    /// Lookups are scoped by user so one customer can never see another's
    /// order status.
    async fn find_order(&self, user_id: &str, order_id: &str) -> Result<Option<Order>>;
}

/// Chat exchange persistence
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Persist one exchange, assigning its id
    async fn append(&self, exchange: ChatExchange) -> Result<ChatExchange>;

    /// The user's most recent `n` exchanges, newest first
    async fn list_recent(&self, user_id: &str, n: usize) -> Result<Vec<ChatExchange>>;

    /// The user's full history, oldest first
    async fn list_all(&self, user_id: &str) -> Result<Vec<ChatExchange>>;

    /// Delete one exchange; `Ok(false)` when it does not exist or belongs to
    /// another user
    async fn delete_one(&self, user_id: &str, id: Uuid) -> Result<bool>;

    /// Delete the user's entire history, returning how many were removed
    async fn delete_all(&self, user_id: &str) -> Result<usize>;
}
