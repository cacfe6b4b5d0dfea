//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::ConfigError;

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Generative fallback backend configuration
    #[serde(default)]
    pub generative: GenerativeConfig,

    /// Engine tuning knobs
    #[serde(default)]
    pub engine: EngineConfig,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                message: "port must be non-zero".to_string(),
            });
        }
        if self.engine.context_window == 0 {
            return Err(ConfigError::InvalidValue {
                field: "engine.context_window".to_string(),
                message: "window must hold at least one exchange".to_string(),
            });
        }
        if self.engine.reply_char_cap < 50 {
            return Err(ConfigError::InvalidValue {
                field: "engine.reply_char_cap".to_string(),
                message: "cap too small to hold any useful reply".to_string(),
            });
        }
        Ok(())
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// CORS origins allowed to call the chat API; empty means same-origin only
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

/// Generative fallback backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerativeConfig {
    /// Model name/id
    #[serde(default = "default_model")]
    pub model: String,
    /// API endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// API key; read from SHOP_AGENT_GENERATIVE__API_KEY in deployments
    #[serde(default)]
    pub api_key: Option<String>,
    /// Request timeout in seconds; the turn degrades to a canned apology on
    /// expiry rather than blocking the user
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for GenerativeConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            endpoint: default_endpoint(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Engine tuning knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Exchanges of short-term memory handed to the generative fallback
    #[serde(default = "default_context_window")]
    pub context_window: usize,
    /// Catalog results per chat reply
    #[serde(default = "default_page_size")]
    pub result_page_size: usize,
    /// Popular-product suggestions appended to empty-result replies
    #[serde(default = "default_suggestion_count")]
    pub suggestion_count: usize,
    /// Hard cap on generative reply length, in characters
    #[serde(default = "default_reply_char_cap")]
    pub reply_char_cap: usize,
}

fn default_context_window() -> usize {
    5
}

fn default_page_size() -> usize {
    5
}

fn default_suggestion_count() -> usize {
    3
}

fn default_reply_char_cap() -> usize {
    300
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            context_window: default_context_window(),
            result_page_size: default_page_size(),
            suggestion_count: default_suggestion_count(),
            reply_char_cap: default_reply_char_cap(),
        }
    }
}

/// Load settings from an optional YAML file layered under environment
/// variables (`SHOP_AGENT_` prefix, `__` separator)
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    if let Some(path) = path {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }
        builder = builder.add_source(File::from(path));
    }

    let config = builder
        .add_source(Environment::with_prefix("SHOP_AGENT").separator("__"))
        .build()?;

    let settings: Settings = config.try_deserialize()?;
    settings.validate()?;

    tracing::debug!(
        host = %settings.server.host,
        port = settings.server.port,
        model = %settings.generative.model,
        "settings loaded"
    );

    Ok(settings)
}
