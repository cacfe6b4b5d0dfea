//! Social media link types

use serde::{Deserialize, Serialize};

/// A storefront social media link
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    /// Platform name ("Facebook", "Instagram")
    pub platform: String,
    pub url: String,
}

impl SocialLink {
    pub fn new(platform: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            url: url.into(),
        }
    }
}
