//! Chat types: intents, exchanges, and the engine's reply envelope

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The classified purpose of a user message
///
/// Computed fresh for every message, never persisted. Classification is
/// deterministic: the router evaluates an ordered rule table and the first
/// matching rule decides the intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Salutations ("hi", "good morning")
    Greeting,
    /// Requests for social media links
    SocialMedia,
    /// Payment method questions
    PaymentInfo,
    /// Order tracking ("where is ORD12345")
    OrderStatus,
    /// Policy / return / warranty questions answered from the FAQ list
    FaqPolicy,
    /// Store address, hours, and contact questions
    StoreInfo,
    /// Catalog searches, optionally with price/category/keyword slots
    ProductQuery,
    /// No rule matched; delegated to the generative responder
    Fallback,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::SocialMedia => "social_media",
            Intent::PaymentInfo => "payment_info",
            Intent::OrderStatus => "order_status",
            Intent::FaqPolicy => "faq_policy",
            Intent::StoreInfo => "store_info",
            Intent::ProductQuery => "product_query",
            Intent::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single completed chat turn, owned by the history store
///
/// Created once per turn and immutable afterward. Deletable individually or
/// in bulk by the owning user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatExchange {
    /// Store-assigned identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: String,
    /// What the user said
    pub message: String,
    /// What the assistant replied
    pub reply: String,
    /// When the turn completed
    pub timestamp: DateTime<Utc>,
}

impl ChatExchange {
    /// Create an exchange with a fresh id and the current timestamp
    pub fn new(
        user_id: impl Into<String>,
        message: impl Into<String>,
        reply: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            message: message.into(),
            reply: reply.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Result of one engine turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandledMessage {
    /// Final user-facing reply text
    pub reply: String,
    /// Id of the persisted exchange; absent when history persistence failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange_id: Option<Uuid>,
}
