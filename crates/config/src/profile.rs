//! Storefront profile
//!
//! Static facts the assistant answers from directly: contact details, store
//! hours, and accepted payment methods. Kept in configuration so replies
//! change without a deploy.

use serde::{Deserialize, Serialize};

/// Storefront facts used in canned replies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreProfile {
    #[serde(default = "default_name")]
    pub name: String,
    /// Fallback URL offered when no social links are configured
    #[serde(default = "default_website")]
    pub website_url: String,
    #[serde(default = "default_support_email")]
    pub support_email: String,
    #[serde(default = "default_support_phone")]
    pub support_phone: String,
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_hours")]
    pub hours: String,
    /// Accepted payment methods, listed in the payment-info reply
    #[serde(default = "default_payment_methods")]
    pub payment_methods: Vec<String>,
}

fn default_name() -> String {
    "Electronix".to_string()
}

fn default_website() -> String {
    "https://electronix.com".to_string()
}

fn default_support_email() -> String {
    "support@electronix.com".to_string()
}

fn default_support_phone() -> String {
    "+92-300-1234567".to_string()
}

fn default_address() -> String {
    "Shop 12, Gulberg Main Market, Lahore".to_string()
}

fn default_hours() -> String {
    "Mon-Sat 10am-9pm, Sun 12pm-8pm".to_string()
}

fn default_payment_methods() -> Vec<String> {
    [
        "Cash on delivery",
        "Debit/credit card",
        "Bank transfer",
        "EasyPaisa",
        "JazzCash",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for StoreProfile {
    fn default() -> Self {
        Self {
            name: default_name(),
            website_url: default_website(),
            support_email: default_support_email(),
            support_phone: default_support_phone(),
            address: default_address(),
            hours: default_hours(),
            payment_methods: default_payment_methods(),
        }
    }
}
