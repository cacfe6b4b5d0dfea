//! The chat engine: one entry point per turn
//!
//! `handle_message` runs the router, dispatches to the matched branch, and
//! persists the exchange exactly once — fallback and degraded turns
//! included. It is the single failure boundary: collaborator errors are
//! logged and converted into apologetic reply text, never propagated.

use std::sync::Arc;

use shop_agent_config::{EngineConfig, StoreProfile, Vocabulary};
use shop_agent_core::{
    CatalogStore, ChatExchange, FaqStore, GenerativeModel, HandledMessage, HistoryStore, Intent,
    OrderStore, Result, SocialLinkStore,
};
use shop_agent_llm::FallbackPrompt;
use shop_agent_nlu::{
    extract_order_id, CategoryInferer, FaqRelevanceScorer, PriceRangeExtractor,
    ProductKeywordExtractor,
};

use crate::context::render_window;
use crate::filter::{ExtractedSlots, ProductFilterBuilder};
use crate::intent::IntentRouter;
use crate::replies;

/// External collaborators behind their traits
#[derive(Clone)]
pub struct Collaborators {
    pub catalog: Arc<dyn CatalogStore>,
    pub faqs: Arc<dyn FaqStore>,
    pub social: Arc<dyn SocialLinkStore>,
    pub orders: Arc<dyn OrderStore>,
    pub history: Arc<dyn HistoryStore>,
    pub generative: Arc<dyn GenerativeModel>,
}

/// The conversational query-understanding engine
///
/// Stateless per invocation: every turn runs the router and extractors to
/// completion with no shared mutable state between concurrent users.
pub struct ChatEngine {
    collaborators: Collaborators,
    profile: StoreProfile,
    config: EngineConfig,
    router: IntentRouter,
    prices: PriceRangeExtractor,
    keywords: ProductKeywordExtractor,
    categories: CategoryInferer,
    faq_scorer: FaqRelevanceScorer,
    filter_builder: ProductFilterBuilder,
}

impl ChatEngine {
    pub fn new(
        collaborators: Collaborators,
        vocabulary: &Vocabulary,
        profile: StoreProfile,
        config: EngineConfig,
    ) -> Self {
        Self {
            collaborators,
            profile,
            config,
            router: IntentRouter::new(vocabulary),
            prices: PriceRangeExtractor::new(),
            keywords: ProductKeywordExtractor::new(vocabulary),
            categories: CategoryInferer::new(vocabulary),
            faq_scorer: FaqRelevanceScorer::new(vocabulary),
            filter_builder: ProductFilterBuilder::new(vocabulary),
        }
    }

    /// Handle one chat turn
    ///
    /// Always returns a reply. Empty input is rejected before any rule runs
    /// and is not persisted; every other turn is appended to history exactly
    /// once, even when the reply is a degraded apology.
    pub async fn handle_message(&self, user_id: &str, text: &str) -> HandledMessage {
        let message = text.trim();
        if message.is_empty() {
            return HandledMessage {
                reply: replies::EMPTY_MESSAGE.to_string(),
                exchange_id: None,
            };
        }

        let reply = match self.reply_for(user_id, message).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(user_id, error = %e, "turn degraded to apology");
                replies::STORE_UNAVAILABLE.to_string()
            }
        };

        let exchange_id = match self
            .collaborators
            .history
            .append(ChatExchange::new(user_id, message, reply.clone()))
            .await
        {
            Ok(exchange) => Some(exchange.id),
            Err(e) => {
                tracing::warn!(user_id, error = %e, "failed to persist exchange");
                None
            }
        };

        HandledMessage { reply, exchange_id }
    }

    async fn reply_for(&self, user_id: &str, message: &str) -> Result<String> {
        let intent = self.router.classify(message);
        tracing::debug!(user_id, intent = %intent, "message classified");

        match intent {
            Intent::Greeting => Ok(replies::greeting()),
            Intent::SocialMedia => {
                let links = self.collaborators.social.list_links().await?;
                Ok(replies::social_links(&links, &self.profile))
            }
            Intent::PaymentInfo => Ok(replies::payment_info(&self.profile)),
            Intent::OrderStatus => self.order_status(user_id, message).await,
            Intent::FaqPolicy => self.faq_policy(message).await,
            Intent::StoreInfo => Ok(replies::store_info(&self.profile)),
            Intent::ProductQuery => self.product_query(message).await,
            Intent::Fallback => self.fallback(user_id, message).await,
        }
    }

    async fn order_status(&self, user_id: &str, message: &str) -> Result<String> {
        let Some(order_id) = extract_order_id(message) else {
            return Ok(replies::order_id_missing());
        };

        match self
            .collaborators
            .orders
            .find_order(user_id, &order_id)
            .await?
        {
            Some(order) => Ok(replies::order_found(&order)),
            None => Ok(replies::order_not_found(&order_id)),
        }
    }

    async fn faq_policy(&self, message: &str) -> Result<String> {
        let faqs = self.collaborators.faqs.list_faqs().await?;
        if faqs.is_empty() {
            return Ok(replies::faq_store_empty(&self.profile));
        }

        let scored = self.faq_scorer.score(&faqs, message);
        if scored.is_empty() {
            return Ok(replies::faq_no_match(&self.profile));
        }

        Ok(replies::faq_answer(&scored))
    }

    async fn product_query(&self, message: &str) -> Result<String> {
        let slots = ExtractedSlots {
            price: self.prices.extract(message),
            keywords: self.keywords.extract(message),
            category: self.categories.infer(message),
        };
        tracing::debug!(?slots, "slots extracted");

        let filter = self.filter_builder.build(&slots);
        let products = self
            .collaborators
            .catalog
            .find_products(&filter, self.config.result_page_size)
            .await?;

        if !products.is_empty() {
            return Ok(replies::product_list(&products, &self.profile));
        }

        let suggestions = self
            .collaborators
            .catalog
            .find_popular(self.config.suggestion_count)
            .await?;
        Ok(replies::no_results(&slots, &suggestions))
    }

    /// Delegate to the generative responder, primed with the conversation
    /// window. A failing responder yields the canned apology, never an error.
    async fn fallback(&self, user_id: &str, message: &str) -> Result<String> {
        let history = self
            .collaborators
            .history
            .list_recent(user_id, self.config.context_window)
            .await?;
        let window = render_window(&history, self.config.context_window);

        let prompt = FallbackPrompt::new(&self.profile)
            .with_context(&window)
            .user_message(message)
            .build();

        match self.collaborators.generative.complete(&prompt).await {
            Ok(text) => Ok(sanitize_generated(&text, self.config.reply_char_cap)),
            Err(e) => {
                tracing::warn!(user_id, error = %e, "generative fallback failed");
                Ok(replies::ASSISTANT_UNAVAILABLE.to_string())
            }
        }
    }
}

/// Post-process a generated reply: blank output becomes the canned message,
/// over-long output is truncated at the configured character cap
fn sanitize_generated(text: &str, char_cap: usize) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return replies::STILL_LEARNING.to_string();
    }

    if trimmed.chars().count() > char_cap {
        let mut capped: String = trimmed.chars().take(char_cap).collect();
        capped.push_str("...");
        return capped;
    }

    trimmed.to_string()
}
