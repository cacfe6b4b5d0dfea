//! In-memory social link store

use async_trait::async_trait;
use parking_lot::RwLock;

use shop_agent_core::{Result, SocialLink, SocialLinkStore};

/// Social media links held in memory
#[derive(Default)]
pub struct MemorySocialLinks {
    links: RwLock<Vec<SocialLink>>,
}

impl MemorySocialLinks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_demo_data() -> Self {
        let store = Self::new();
        store.insert(SocialLink::new("Facebook", "https://facebook.com/electronix"));
        store.insert(SocialLink::new(
            "Instagram",
            "https://instagram.com/electronix.pk",
        ));
        store
    }

    pub fn insert(&self, link: SocialLink) {
        self.links.write().push(link);
    }
}

#[async_trait]
impl SocialLinkStore for MemorySocialLinks {
    async fn list_links(&self) -> Result<Vec<SocialLink>> {
        Ok(self.links.read().clone())
    }
}
