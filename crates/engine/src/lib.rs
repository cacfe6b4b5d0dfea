//! Conversational query-understanding engine
//!
//! Features:
//! - Ordered rule-table intent routing (precedence is data, not control flow)
//! - Slot-driven catalog filter construction
//! - FAQ answer selection
//! - Bounded conversation window for the generative fallback
//! - A single failure boundary: the chat never surfaces an error to the user

pub mod context;
pub mod engine;
pub mod filter;
pub mod intent;
pub mod replies;

pub use context::render_window;
pub use engine::{ChatEngine, Collaborators};
pub use filter::{ExtractedSlots, ProductFilterBuilder};
pub use intent::IntentRouter;
