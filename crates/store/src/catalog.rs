//! In-memory product catalog

use async_trait::async_trait;
use parking_lot::RwLock;

use shop_agent_core::{CatalogStore, PriceTier, Product, ProductFilter, Result};

/// Product catalog held in memory
///
/// Popularity is insertion order: the storefront seeds its best sellers
/// first, so `find_popular` just takes from the front.
#[derive(Default)]
pub struct MemoryCatalog {
    products: RwLock<Vec<Product>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the catalog with a demo product set
    pub fn with_demo_data() -> Self {
        let catalog = Self::new();
        for product in demo_products() {
            catalog.insert(product);
        }
        catalog
    }

    pub fn insert(&self, product: Product) {
        self.products.write().push(product);
    }

    pub fn len(&self) -> usize {
        self.products.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.read().is_empty()
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalog {
    async fn find_products(&self, filter: &ProductFilter, limit: usize) -> Result<Vec<Product>> {
        let products = self.products.read();
        Ok(products
            .iter()
            .filter(|p| filter.matches(p))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn find_popular(&self, limit: usize) -> Result<Vec<Product>> {
        let products = self.products.read();
        Ok(products
            .iter()
            .filter(|p| p.available)
            .take(limit)
            .cloned()
            .collect())
    }
}

fn demo_products() -> Vec<Product> {
    vec![
        Product {
            id: "p-laptop-14".to_string(),
            name: "ProBook 14 Laptop".to_string(),
            description: "14-inch business laptop with 16GB RAM".to_string(),
            category: "Electronics".to_string(),
            available: true,
            price_tiers: vec![
                PriceTier {
                    label: "256GB".to_string(),
                    price: 145_000,
                },
                PriceTier {
                    label: "512GB".to_string(),
                    price: 165_000,
                },
            ],
        },
        Product {
            id: "p-iphone-14".to_string(),
            name: "iPhone 14".to_string(),
            description: "128GB, PTA approved".to_string(),
            category: "Electronics".to_string(),
            available: true,
            price_tiers: vec![PriceTier {
                label: "128GB".to_string(),
                price: 280_000,
            }],
        },
        Product {
            id: "p-earbuds-pro".to_string(),
            name: "AirDot Pro Earbuds".to_string(),
            description: "Wireless earbuds with noise cancellation".to_string(),
            category: "Gadgets".to_string(),
            available: true,
            price_tiers: vec![PriceTier {
                label: "Standard".to_string(),
                price: 8_500,
            }],
        },
        Product {
            id: "p-fan-pedestal".to_string(),
            name: "Breeze Pedestal Fan".to_string(),
            description: "Three-speed pedestal fan".to_string(),
            category: "Electronics".to_string(),
            available: true,
            price_tiers: vec![PriceTier {
                label: "Standard".to_string(),
                price: 12_000,
            }],
        },
        Product {
            id: "p-charger-65w".to_string(),
            name: "65W Fast Charger".to_string(),
            description: "USB-C fast charger for phones and laptops".to_string(),
            category: "Accessories".to_string(),
            available: true,
            price_tiers: vec![PriceTier {
                label: "Standard".to_string(),
                price: 4_500,
            }],
        },
        Product {
            id: "p-tv-55".to_string(),
            name: "Vision 55 Smart TV".to_string(),
            description: "55-inch 4K smart television".to_string(),
            category: "Electronics".to_string(),
            available: false,
            price_tiers: vec![PriceTier {
                label: "Standard".to_string(),
                price: 190_000,
            }],
        },
    ]
}
