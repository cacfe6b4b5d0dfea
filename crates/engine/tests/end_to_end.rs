//! End-to-end turns against the in-memory stores and a scripted
//! generative model

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use shop_agent_config::{EngineConfig, StoreProfile, Vocabulary};
use shop_agent_core::{
    CatalogStore, Error, GenerativeModel, Order, Product, ProductFilter, Result,
};
use shop_agent_engine::{ChatEngine, Collaborators};
use shop_agent_store::{
    MemoryCatalog, MemoryFaqStore, MemoryHistory, MemoryOrderStore, MemorySocialLinks,
};

/// Scripted generative model: canned reply, error, or blank output
struct ScriptedModel {
    behavior: ModelBehavior,
    prompts: Mutex<Vec<String>>,
}

enum ModelBehavior {
    Reply(String),
    Fail,
    Blank,
}

impl ScriptedModel {
    fn replying(text: &str) -> Self {
        Self {
            behavior: ModelBehavior::Reply(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            behavior: ModelBehavior::Fail,
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn blank() -> Self {
        Self {
            behavior: ModelBehavior::Blank,
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().last().cloned()
    }
}

#[async_trait]
impl GenerativeModel for ScriptedModel {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().push(prompt.to_string());
        match &self.behavior {
            ModelBehavior::Reply(text) => Ok(text.clone()),
            ModelBehavior::Fail => Err(Error::Generative("scripted failure".to_string())),
            ModelBehavior::Blank => Ok("   ".to_string()),
        }
    }

    fn model_name(&self) -> &str {
        "scripted-model"
    }
}

/// Catalog that always errors, for degraded-path tests
struct BrokenCatalog;

#[async_trait]
impl CatalogStore for BrokenCatalog {
    async fn find_products(&self, _filter: &ProductFilter, _limit: usize) -> Result<Vec<Product>> {
        Err(Error::Store("catalog offline".to_string()))
    }

    async fn find_popular(&self, _limit: usize) -> Result<Vec<Product>> {
        Err(Error::Store("catalog offline".to_string()))
    }
}

struct Harness {
    engine: ChatEngine,
    history: Arc<MemoryHistory>,
    model: Arc<ScriptedModel>,
}

fn harness_with(model: ScriptedModel, catalog: Arc<dyn CatalogStore>) -> Harness {
    let history = Arc::new(MemoryHistory::new());
    let model = Arc::new(model);

    let orders = MemoryOrderStore::new();
    orders.insert("alice", Order::new("ORD55555", "Shipped"));

    let collaborators = Collaborators {
        catalog,
        faqs: Arc::new(MemoryFaqStore::with_demo_data()),
        social: Arc::new(MemorySocialLinks::with_demo_data()),
        orders: Arc::new(orders),
        history: history.clone(),
        generative: model.clone(),
    };

    let engine = ChatEngine::new(
        collaborators,
        &Vocabulary::default(),
        StoreProfile::default(),
        EngineConfig::default(),
    );

    Harness {
        engine,
        history,
        model,
    }
}

fn harness(model: ScriptedModel) -> Harness {
    harness_with(model, Arc::new(MemoryCatalog::with_demo_data()))
}

#[tokio::test]
async fn greeting_turn_replies_and_persists() {
    let h = harness(ScriptedModel::replying("unused"));

    let handled = h.engine.handle_message("alice", "Hey there!").await;

    assert!(handled.reply.contains("Hello!"));
    assert!(handled.exchange_id.is_some());
    assert_eq!(h.history.len(), 1);
}

#[tokio::test]
async fn empty_message_is_rejected_and_not_persisted() {
    let h = harness(ScriptedModel::replying("unused"));

    let handled = h.engine.handle_message("alice", "   ").await;

    assert!(handled.reply.contains("type a message"));
    assert!(handled.exchange_id.is_none());
    assert!(h.history.is_empty());
}

#[tokio::test]
async fn product_query_lists_matches() {
    let h = harness(ScriptedModel::replying("unused"));

    let handled = h.engine.handle_message("alice", "show me a laptop").await;

    assert!(handled.reply.contains("ProBook 14 Laptop"));
    assert!(handled.reply.contains("Rs 145000"));
    assert!(handled.reply.contains("Here are some options:"));
}

#[tokio::test]
async fn priced_out_query_explains_and_suggests() {
    let h = harness(ScriptedModel::replying("unused"));

    // Demo laptop costs 145k, so nothing matches under 100k
    let handled = h
        .engine
        .handle_message("alice", "do you have a laptop under 100k")
        .await;

    assert!(handled.reply.contains("laptop"));
    assert!(handled.reply.contains("100000"));
    assert!(handled.reply.contains("You might like:"));
    // Suggestions capped at three
    let suggestion_lines = handled
        .reply
        .lines()
        .filter(|l| l.starts_with("- "))
        .count();
    assert!(suggestion_lines <= 3);
}

#[tokio::test]
async fn order_status_found() {
    let h = harness(ScriptedModel::replying("unused"));

    let handled = h.engine.handle_message("alice", "track ORD55555").await;

    assert!(handled.reply.contains("Order ORD55555"));
    assert!(handled.reply.contains("Status: Shipped"));
}

#[tokio::test]
async fn order_status_unknown_id_gets_specific_message() {
    let h = harness(ScriptedModel::replying("unused"));

    let handled = h.engine.handle_message("alice", "ORD12345 status").await;

    assert_eq!(
        handled.reply,
        "Order ORD12345 not found. Please verify your order ID."
    );
}

#[tokio::test]
async fn order_status_without_id_asks_for_one() {
    let h = harness(ScriptedModel::replying("unused"));

    let handled = h.engine.handle_message("alice", "where is my order").await;

    assert!(handled.reply.contains("provide your Order ID"));
}

#[tokio::test]
async fn faq_turn_answers_paraphrase() {
    let h = harness(ScriptedModel::replying("unused"));

    let handled = h
        .engine
        .handle_message("alice", "what is your refund policy")
        .await;

    assert!(handled.reply.contains("14 days"));
}

#[tokio::test]
async fn social_turn_lists_links() {
    let h = harness(ScriptedModel::replying("unused"));

    let handled = h.engine.handle_message("alice", "instagram link please").await;

    assert!(handled.reply.contains("Connect with us on:"));
    assert!(handled.reply.contains("Instagram"));
}

#[tokio::test]
async fn payment_turn_lists_methods() {
    let h = harness(ScriptedModel::replying("unused"));

    let handled = h
        .engine
        .handle_message("alice", "do you take cash on delivery")
        .await;

    assert!(handled.reply.contains("We accept:"));
    assert!(handled.reply.contains("Cash on delivery"));
}

#[tokio::test]
async fn store_info_turn() {
    let h = harness(ScriptedModel::replying("unused"));

    let handled = h
        .engine
        .handle_message("alice", "what are your opening hours")
        .await;

    assert!(handled.reply.contains("Hours:"));
    assert!(handled.reply.contains("Address:"));
}

#[tokio::test]
async fn fallback_primes_model_with_window() {
    let h = harness(ScriptedModel::replying("Why did the resistor cross the road?"));

    // Build up some history first
    h.engine.handle_message("alice", "hi").await;
    let handled = h.engine.handle_message("alice", "tell me a joke").await;

    assert_eq!(handled.reply, "Why did the resistor cross the road?");

    let prompt = h.model.last_prompt().expect("model invoked");
    assert!(prompt.contains("Chat history:"));
    assert!(prompt.contains("User: hi"));
    assert!(prompt.ends_with("User: tell me a joke"));
}

#[tokio::test]
async fn fallback_failure_yields_canned_apology_and_persists() {
    let h = harness(ScriptedModel::failing());

    let handled = h.engine.handle_message("alice", "tell me a joke").await;

    assert_eq!(
        handled.reply,
        "Sorry, AI assistant is currently unavailable. Please try again later."
    );
    assert!(handled.exchange_id.is_some());
    assert_eq!(h.history.len(), 1);
}

#[tokio::test]
async fn fallback_blank_output_is_substituted() {
    let h = harness(ScriptedModel::blank());

    let handled = h.engine.handle_message("alice", "tell me a joke").await;

    assert!(handled.reply.contains("still learning"));
}

#[tokio::test]
async fn fallback_long_output_is_truncated() {
    let h = harness(ScriptedModel::replying(&"word ".repeat(100)));

    let handled = h.engine.handle_message("alice", "tell me a joke").await;

    assert!(handled.reply.chars().count() <= 303);
    assert!(handled.reply.ends_with("..."));
}

#[tokio::test]
async fn broken_catalog_degrades_but_still_persists() {
    let h = harness_with(ScriptedModel::replying("unused"), Arc::new(BrokenCatalog));

    let handled = h.engine.handle_message("alice", "show me a laptop").await;

    assert!(handled.reply.contains("Sorry, something went wrong"));
    assert!(handled.exchange_id.is_some());
    assert_eq!(h.history.len(), 1);
}

#[tokio::test]
async fn query_without_slots_still_finds_products() {
    let h = harness(ScriptedModel::replying("unused"));

    let handled = h
        .engine
        .handle_message("alice", "what do you recommend")
        .await;

    // Default filter spans all categories, so the demo catalog answers
    assert!(handled.reply.contains("Here are some options:"));
}
