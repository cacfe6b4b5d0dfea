//! Configuration management for the shop assistant
//!
//! Supports loading configuration from:
//! - YAML files
//! - Environment variables (SHOP_AGENT_ prefix)
//!
//! Two layers live here:
//! - `Settings`: deployment concerns (server bind address, generative
//!   backend endpoint and credentials, engine tuning knobs)
//! - `Vocabulary` / `StoreProfile`: the curated rule vocabularies and
//!   storefront facts the engine answers from, compiled-in defaults with
//!   YAML overrides

pub mod profile;
pub mod settings;
pub mod vocabulary;

pub use profile::StoreProfile;
pub use settings::{load_settings, EngineConfig, GenerativeConfig, ServerConfig, Settings};
pub use vocabulary::{CategoryKeywords, ScoringConfig, Vocabulary};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("configuration file not found: {0}")]
    FileNotFound(String),

    #[error("failed to parse configuration: {0}")]
    ParseError(String),

    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
