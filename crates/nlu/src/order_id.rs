//! Order-id token extraction

use once_cell::sync::Lazy;
use regex::Regex;

/// Customer-facing order ids: `ORD` followed by at least four digits
static ORDER_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bORD\d{4,}\b").expect("static regex"));

/// Extract the first order-id token, normalized to upper-case
pub fn extract_order_id(text: &str) -> Option<String> {
    ORDER_ID
        .find(text)
        .map(|m| m.as_str().to_uppercase())
}
