//! HTTP server for the shop assistant
//!
//! Thin surface over the engine: one chat endpoint plus history
//! retrieval and deletion. Authentication is an upstream concern; the
//! handlers only require a caller-supplied user id header.

pub mod http;
pub mod state;

pub use http::create_router;
pub use state::AppState;
