//! Core types and traits for the shop assistant
//!
//! This crate provides foundational types used across all other crates:
//! - Intent classification and chat exchange types
//! - Catalog types (products, price ranges, filters)
//! - FAQ types
//! - Collaborator traits for pluggable stores and the generative fallback
//! - Error types

pub mod catalog;
pub mod chat;
pub mod error;
pub mod faq;
pub mod order;
pub mod social;
pub mod traits;

pub use catalog::{PriceRange, PriceTier, Product, ProductFilter};
pub use chat::{ChatExchange, HandledMessage, Intent};
pub use error::{Error, Result};
pub use faq::{FaqEntry, ScoredFaq};
pub use order::Order;
pub use social::SocialLink;

pub use traits::{
    CatalogStore, FaqStore, GenerativeModel, HistoryStore, OrderStore, SocialLinkStore,
};
