//! Reply construction
//!
//! Every branch of the router produces its final text here. Empty candidate
//! lists yield explicit "not found" messages, never a silent empty string.

use chrono::{DateTime, Utc};

use shop_agent_config::StoreProfile;
use shop_agent_core::{Order, Product, ScoredFaq, SocialLink};

use crate::filter::ExtractedSlots;

/// Reply when the incoming message is empty or whitespace-only
pub const EMPTY_MESSAGE: &str =
    "Please type a message so I can help — ask about products, orders, or our policies.";

/// Reply when a collaborator failed mid-turn
pub const STORE_UNAVAILABLE: &str =
    "Sorry, something went wrong on our side. Please try again in a moment.";

/// Reply when the generative fallback failed or timed out
pub const ASSISTANT_UNAVAILABLE: &str =
    "Sorry, AI assistant is currently unavailable. Please try again later.";

/// Substituted when the generative fallback returns blank output
pub const STILL_LEARNING: &str =
    "I'm still learning about that. Could you rephrase or ask about our products and policies?";

pub fn greeting() -> String {
    "Hello! How can I assist you with electronic products today?".to_string()
}

pub fn social_links(links: &[SocialLink], profile: &StoreProfile) -> String {
    if links.is_empty() {
        return format!("Visit our store: {}", profile.website_url);
    }

    let listed = links
        .iter()
        .map(|link| format!("- {}: {}", link.platform, link.url))
        .collect::<Vec<_>>()
        .join("\n");

    format!("Connect with us on:\n{listed}")
}

pub fn payment_info(profile: &StoreProfile) -> String {
    let methods = profile
        .payment_methods
        .iter()
        .map(|m| format!("- {m}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!("We accept:\n{methods}")
}

pub fn store_info(profile: &StoreProfile) -> String {
    format!(
        "{}\n- Address: {}\n- Hours: {}\n- Phone: {}\n- Email: {}",
        profile.name, profile.address, profile.hours, profile.support_phone, profile.support_email
    )
}

pub fn order_found(order: &Order) -> String {
    format!(
        "Order {}:\n- Status: {}\n- Last update: {}",
        order.order_id,
        order.status,
        format_date(order.last_update)
    )
}

pub fn order_not_found(order_id: &str) -> String {
    format!("Order {order_id} not found. Please verify your order ID.")
}

pub fn order_id_missing() -> String {
    "Please provide your Order ID (format: ORD12345) to check status.".to_string()
}

/// Top FAQ answer plus up to two related questions
pub fn faq_answer(scored: &[ScoredFaq]) -> String {
    let mut reply = scored[0].entry.answer.clone();

    if scored.len() > 1 {
        let related = scored[1..]
            .iter()
            .take(2)
            .enumerate()
            .map(|(i, faq)| format!("{}. {}", i + 1, faq.entry.question))
            .collect::<Vec<_>>()
            .join("\n");
        reply.push_str("\n\nRelated questions:\n");
        reply.push_str(&related);
    }

    reply
}

/// Standard policy text when no FAQ scored above the threshold
pub fn faq_no_match(profile: &StoreProfile) -> String {
    format!(
        "Our standard return policy:\n\
         - 14-day return window\n\
         - Unopened items only\n\
         - Proof of purchase required\n\n\
         For specific cases, contact {}",
        profile.support_email
    )
}

/// When the FAQ store has no entries at all
pub fn faq_store_empty(profile: &StoreProfile) -> String {
    format!(
        "For policy questions, please contact {} or call {}.",
        profile.support_email, profile.support_phone
    )
}

/// Matching products, cheapest tier quoted, with a product link each
pub fn product_list(products: &[Product], profile: &StoreProfile) -> String {
    let listed = products
        .iter()
        .enumerate()
        .map(|(i, product)| {
            let price = product
                .min_price()
                .map(|p| format!("Rs {p}"))
                .unwrap_or_else(|| "price on request".to_string());
            format!(
                "{}. {} - {} (in stock)\n   View: {}/products/{}",
                i + 1,
                product.name,
                price,
                profile.website_url,
                product.id
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("Here are some options:\n{listed}\n\nAsk about a specific product for more details!")
}

/// Graduated empty-result explanation: names whichever slots produced zero
/// matches, then softens with popular suggestions
pub fn no_results(slots: &ExtractedSlots, suggestions: &[Product]) -> String {
    let mut constraints: Vec<String> = Vec::new();

    if !slots.keywords.is_empty() {
        constraints.push(format!("\"{}\"", slots.keywords.join("/")));
    }
    if let Some(ref category) = slots.category {
        constraints.push(format!("in {category}"));
    }
    if let Some(price) = slots.price {
        constraints.push(price.to_string());
    }

    let mut reply = if constraints.is_empty() {
        "I couldn't find any matching products right now.".to_string()
    } else {
        format!(
            "I couldn't find any products matching {}.",
            constraints.join(" ")
        )
    };

    if !suggestions.is_empty() {
        let listed = suggestions
            .iter()
            .map(|product| {
                let price = product
                    .min_price()
                    .map(|p| format!(" (Rs {p})"))
                    .unwrap_or_default();
                format!("- {}{}", product.name, price)
            })
            .collect::<Vec<_>>()
            .join("\n");
        reply.push_str("\n\nYou might like:\n");
        reply.push_str(&listed);
    } else {
        reply.push_str(" Would you like me to check something else?");
    }

    reply
}

fn format_date(date: DateTime<Utc>) -> String {
    date.format("%a %b %d %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_agent_core::{FaqEntry, PriceRange, PriceTier};

    fn profile() -> StoreProfile {
        StoreProfile::default()
    }

    fn product(name: &str, price: i64) -> Product {
        Product {
            id: "p-1".to_string(),
            name: name.to_string(),
            description: String::new(),
            category: "Electronics".to_string(),
            available: true,
            price_tiers: vec![PriceTier {
                label: "Standard".to_string(),
                price,
            }],
        }
    }

    #[test]
    fn test_social_links_fallback() {
        let reply = social_links(&[], &profile());
        assert!(reply.contains("https://electronix.com"));
    }

    #[test]
    fn test_social_links_listed() {
        let links = vec![SocialLink::new("Facebook", "https://fb.com/x")];
        let reply = social_links(&links, &profile());
        assert!(reply.contains("- Facebook: https://fb.com/x"));
    }

    #[test]
    fn test_order_found_format() {
        let order = Order::new("ORD12345", "Shipped");
        let reply = order_found(&order);
        assert!(reply.contains("Order ORD12345"));
        assert!(reply.contains("Status: Shipped"));
        assert!(reply.contains("Last update:"));
    }

    #[test]
    fn test_faq_answer_with_related() {
        let scored = vec![
            ScoredFaq {
                entry: FaqEntry::new("Q1?", "Answer one."),
                score: 20,
            },
            ScoredFaq {
                entry: FaqEntry::new("Q2?", "Answer two."),
                score: 12,
            },
            ScoredFaq {
                entry: FaqEntry::new("Q3?", "Answer three."),
                score: 8,
            },
            ScoredFaq {
                entry: FaqEntry::new("Q4?", "Answer four."),
                score: 6,
            },
        ];

        let reply = faq_answer(&scored);
        assert!(reply.starts_with("Answer one."));
        assert!(reply.contains("1. Q2?"));
        assert!(reply.contains("2. Q3?"));
        // Only two related questions
        assert!(!reply.contains("Q4?"));
    }

    #[test]
    fn test_no_results_names_every_constraint() {
        let slots = ExtractedSlots {
            keywords: vec!["laptop".to_string()],
            category: Some("Electronics".to_string()),
            price: Some(PriceRange::at_most(100_000)),
        };
        let reply = no_results(&slots, &[product("AirDot Pro", 8_500)]);

        assert!(reply.contains("laptop"));
        assert!(reply.contains("in Electronics"));
        assert!(reply.contains("100000"));
        assert!(reply.contains("You might like:"));
        assert!(reply.contains("AirDot Pro"));
    }

    #[test]
    fn test_no_results_without_suggestions() {
        let reply = no_results(&ExtractedSlots::default(), &[]);
        assert!(reply.contains("couldn't find"));
        assert!(reply.contains("something else"));
    }

    #[test]
    fn test_product_list_quotes_cheapest_tier() {
        let mut item = product("ProBook 14", 145_000);
        item.price_tiers.push(PriceTier {
            label: "512GB".to_string(),
            price: 165_000,
        });

        let reply = product_list(&[item], &profile());
        assert!(reply.contains("Rs 145000"));
        assert!(!reply.contains("Rs 165000"));
        assert!(reply.contains("/products/p-1"));
    }
}
