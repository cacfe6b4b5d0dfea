//! Order types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An order as returned by the order store
///
/// Order ids follow the customer-facing format `ORD` + at least four digits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    /// Human-readable status ("Processing", "Shipped", "Delivered")
    pub status: String,
    pub last_update: DateTime<Utc>,
}

impl Order {
    pub fn new(order_id: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            status: status.into(),
            last_update: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_creation() {
        let order = Order::new("ORD12345", "Shipped");
        assert_eq!(order.order_id, "ORD12345");
        assert_eq!(order.status, "Shipped");
    }
}
