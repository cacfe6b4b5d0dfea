//! Catalog types: products, price ranges, and search filters

use serde::{Deserialize, Serialize};

/// A price bound extracted from free text, in whole rupees
///
/// At least one bound is present once the extractor matches. `min <= max` is
/// deliberately NOT enforced: an inverted range simply matches no products,
/// and the engine answers with the empty-result fallback instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    /// Lower bound, inclusive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    /// Upper bound, inclusive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
}

impl PriceRange {
    /// Upper bound only ("under 50k")
    pub fn at_most(max: i64) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    /// Lower bound only ("over 5000")
    pub fn at_least(min: i64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Both bounds ("between 1000 and 5000")
    pub fn between(min: i64, max: i64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Exact price ("rs. 2500")
    pub fn exact(amount: i64) -> Self {
        Self {
            min: Some(amount),
            max: Some(amount),
        }
    }

    /// Whether a price satisfies both bounds
    pub fn contains(&self, price: i64) -> bool {
        self.min.map_or(true, |min| price >= min) && self.max.map_or(true, |max| price <= max)
    }
}

impl std::fmt::Display for PriceRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.min, self.max) {
            (Some(min), Some(max)) if min == max => write!(f, "Rs {}", min),
            (Some(min), Some(max)) => write!(f, "Rs {} to Rs {}", min, max),
            (Some(min), None) => write!(f, "over Rs {}", min),
            (None, Some(max)) => write!(f, "under Rs {}", max),
            (None, None) => write!(f, "any price"),
        }
    }
}

/// One purchasable tier of a product (e.g. a size or storage variant)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceTier {
    /// Tier label ("64GB", "Large")
    pub label: String,
    /// Price in whole rupees
    pub price: i64,
}

/// A catalog product as returned by the catalog store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub available: bool,
    /// Purchasable tiers; replies quote the cheapest
    pub price_tiers: Vec<PriceTier>,
}

impl Product {
    /// Cheapest tier price, if the product has any tier at all
    pub fn min_price(&self) -> Option<i64> {
        self.price_tiers.iter().map(|t| t.price).min()
    }
}

/// A structured catalog query built from extracted slots
///
/// Built fresh per request; has no identity beyond the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductFilter {
    /// Never recommend out-of-stock items
    pub available_only: bool,
    /// Single category constraint; categories are never combined
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Disjunctive terms matched against name and description
    #[serde(default)]
    pub name_or_description_terms: Vec<String>,
    /// Optional price bounds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceRange>,
    /// Fallback category set used when no slot was extracted
    #[serde(default)]
    pub default_categories: Vec<String>,
}

impl ProductFilter {
    /// Whether a product satisfies every constraint of this filter
    ///
    /// Price bounds are checked against the cheapest tier, matching what the
    /// reply quotes. A product with no price tiers never satisfies a price
    /// constraint.
    pub fn matches(&self, product: &Product) -> bool {
        if self.available_only && !product.available {
            return false;
        }

        if let Some(ref category) = self.category {
            if !product.category.eq_ignore_ascii_case(category) {
                return false;
            }
        } else if !self.default_categories.is_empty()
            && !self
                .default_categories
                .iter()
                .any(|c| product.category.eq_ignore_ascii_case(c))
        {
            return false;
        }

        if !self.name_or_description_terms.is_empty() {
            let name = product.name.to_lowercase();
            let description = product.description.to_lowercase();
            let hit = self
                .name_or_description_terms
                .iter()
                .any(|term| name.contains(&term.to_lowercase()) || description.contains(&term.to_lowercase()));
            if !hit {
                return false;
            }
        }

        if let Some(ref range) = self.price {
            match product.min_price() {
                Some(price) if range.contains(price) => {}
                _ => return false,
            }
        }

        true
    }
}
