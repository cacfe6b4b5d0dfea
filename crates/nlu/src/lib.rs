//! Deterministic natural-language understanding for the shop assistant
//!
//! Pattern-rule extractors, no trained model:
//! - Price range extraction with `50k` / `rs. 1,000` normalization
//! - Product keyword matching against a curated vocabulary
//! - Category inference (first match wins)
//! - Order-id token extraction
//! - FAQ relevance scoring with tunable constants
//!
//! Extractors never fail: a miss is `None` or an empty collection, and the
//! caller always has a defined fallback reply.

pub mod category;
pub mod faq_scorer;
pub mod keywords;
pub mod order_id;
pub mod price;

pub use category::CategoryInferer;
pub use faq_scorer::FaqRelevanceScorer;
pub use keywords::ProductKeywordExtractor;
pub use order_id::extract_order_id;
pub use price::PriceRangeExtractor;
