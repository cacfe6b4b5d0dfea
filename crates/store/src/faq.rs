//! In-memory FAQ store

use async_trait::async_trait;
use parking_lot::RwLock;

use shop_agent_core::{FaqEntry, FaqStore, Result};

/// FAQ list held in memory
#[derive(Default)]
pub struct MemoryFaqStore {
    faqs: RwLock<Vec<FaqEntry>>,
}

impl MemoryFaqStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with the storefront's standard FAQ set
    pub fn with_demo_data() -> Self {
        let store = Self::new();
        store.insert(FaqEntry::new(
            "What is your return policy?",
            "You can return unopened items within 14 days with proof of purchase.",
        ));
        store.insert(FaqEntry::new(
            "Do products come with a warranty?",
            "All electronics carry a one-year manufacturer warranty.",
        ));
        store.insert(FaqEntry::new(
            "How long does delivery take?",
            "Delivery takes 3-5 business days within major cities.",
        ));
        store.insert(FaqEntry::new(
            "How do I exchange a faulty item?",
            "Contact support within 7 days and we will arrange a pickup and exchange.",
        ));
        store
    }

    pub fn insert(&self, entry: FaqEntry) {
        self.faqs.write().push(entry);
    }
}

#[async_trait]
impl FaqStore for MemoryFaqStore {
    async fn list_faqs(&self) -> Result<Vec<FaqEntry>> {
        Ok(self.faqs.read().clone())
    }
}
