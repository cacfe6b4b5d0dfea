//! Catalog filter construction from extracted slots

use shop_agent_config::Vocabulary;
use shop_agent_core::{PriceRange, ProductFilter};

/// Slots pulled out of one product-query message
#[derive(Debug, Clone, Default)]
pub struct ExtractedSlots {
    pub price: Option<PriceRange>,
    pub keywords: Vec<String>,
    pub category: Option<String>,
}

impl ExtractedSlots {
    pub fn is_empty(&self) -> bool {
        self.price.is_none() && self.keywords.is_empty() && self.category.is_none()
    }
}

/// Turns extracted slots into a structured catalog filter
pub struct ProductFilterBuilder {
    known_categories: Vec<String>,
}

impl ProductFilterBuilder {
    pub fn new(vocabulary: &Vocabulary) -> Self {
        Self {
            known_categories: vocabulary.category_names(),
        }
    }

    /// Build a filter; never unconstrained
    ///
    /// Recommendations only ever search available stock. When no slot was
    /// extracted at all, the filter spans every known category so the
    /// assistant still returns something relevant instead of dumping the
    /// whole catalog or nothing.
    pub fn build(&self, slots: &ExtractedSlots) -> ProductFilter {
        let mut filter = ProductFilter {
            available_only: true,
            ..ProductFilter::default()
        };

        if !slots.keywords.is_empty() {
            filter.name_or_description_terms = slots.keywords.clone();
        }
        if let Some(ref category) = slots.category {
            filter.category = Some(category.clone());
        }
        if let Some(price) = slots.price {
            filter.price = Some(price);
        }

        if slots.is_empty() {
            filter.default_categories = self.known_categories.clone();
        }

        filter
    }
}
