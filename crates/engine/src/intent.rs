//! Intent routing
//!
//! A fixed, ordered table of regex predicates evaluated top to bottom; the
//! first match decides the intent. The order is a designed precedence, not
//! alphabetical: rule vocabularies overlap (e.g. "return" belongs to the FAQ
//! rule but also smells like a catalog word), so earlier rules deliberately
//! shadow later ones.

use regex::Regex;

use shop_agent_config::Vocabulary;
use shop_agent_core::Intent;
use shop_agent_nlu::ProductKeywordExtractor;

/// One row of the routing table
pub struct IntentRule {
    pub intent: Intent,
    pattern: Regex,
    /// The product rule also fires on any recognized vocabulary keyword,
    /// which is why it sits last among the specific rules
    match_keywords: bool,
}

impl IntentRule {
    fn new(intent: Intent, pattern: &str) -> Self {
        Self {
            intent,
            pattern: Regex::new(pattern).expect("static rule pattern"),
            match_keywords: false,
        }
    }

    fn with_keywords(mut self) -> Self {
        self.match_keywords = true;
        self
    }

    /// Whether this rule matches the (lower-cased) message
    pub fn matches(&self, text: &str, keywords: &ProductKeywordExtractor) -> bool {
        self.pattern.is_match(text) || (self.match_keywords && keywords.has_known_keyword(text))
    }
}

/// Classifies messages by evaluating the rule table in order
pub struct IntentRouter {
    rules: Vec<IntentRule>,
    keywords: ProductKeywordExtractor,
}

impl IntentRouter {
    pub fn new(vocabulary: &Vocabulary) -> Self {
        Self {
            rules: rule_table(),
            keywords: ProductKeywordExtractor::new(vocabulary),
        }
    }

    /// Classify a message; stateless, so identical input always yields the
    /// identical intent
    pub fn classify(&self, text: &str) -> Intent {
        let lowered = text.to_lowercase();

        for rule in &self.rules {
            if rule.matches(&lowered, &self.keywords) {
                tracing::debug!(intent = %rule.intent, "rule matched");
                return rule.intent;
            }
        }

        Intent::Fallback
    }

    /// The routing table, for per-rule inspection in tests
    pub fn rules(&self) -> &[IntentRule] {
        &self.rules
    }
}

/// The canonical precedence order
fn rule_table() -> Vec<IntentRule> {
    vec![
        IntentRule::new(
            Intent::Greeting,
            r"\b(hi|hello|hey)\b|good\s+(morning|afternoon|evening)",
        ),
        IntentRule::new(
            Intent::SocialMedia,
            r"\b(link|social media|facebook|instagram|twitter|tiktok|connect|follow)\b",
        ),
        IntentRule::new(
            Intent::PaymentInfo,
            r"\b(payment|pay|card|credit|debit|cash on delivery|cod|installments?|easypaisa|jazzcash|bank transfer)\b",
        ),
        IntentRule::new(
            Intent::OrderStatus,
            r"\b(order|track|status|delivery|ship(?:ping|ment|ped)?)\b",
        ),
        IntentRule::new(
            Intent::FaqPolicy,
            r"\b(policy|return|refund|warranty|faq|exchange|procedure)\b|how to",
        ),
        IntentRule::new(
            Intent::StoreInfo,
            r"\b(address|location|hours|timings?|open|close|closing|contact|phone|email)\b|where.*\b(store|shop)\b",
        ),
        IntentRule::new(
            Intent::ProductQuery,
            r"\b(products?|items?|device|model|specs|about|details|recommend|appliances?|gadgets?|electronics|household|buy|purchase|price|prices|show|find|looking)\b",
        )
        .with_keywords(),
    ]
}
