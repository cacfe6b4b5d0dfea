//! FAQ relevance scoring
//!
//! Additive term-overlap scoring with tunable constants. Crude on purpose:
//! every score is explainable from the three rules below, so ranking
//! behavior stays auditable without a trained ranker.

use shop_agent_config::{ScoringConfig, Vocabulary};
use shop_agent_core::{FaqEntry, ScoredFaq};

/// Scores a candidate FAQ list against one user message
pub struct FaqRelevanceScorer {
    priority_terms: Vec<String>,
    scoring: ScoringConfig,
}

impl FaqRelevanceScorer {
    pub fn new(vocabulary: &Vocabulary) -> Self {
        Self {
            priority_terms: vocabulary
                .faq_priority_terms
                .iter()
                .map(|t| t.to_lowercase())
                .collect(),
            scoring: vocabulary.scoring,
        }
    }

    /// Score and rank FAQs against a message
    ///
    /// Returns entries above the threshold, sorted descending by score.
    /// The sort is stable, so ties keep the store's insertion order.
    pub fn score(&self, faqs: &[FaqEntry], message: &str) -> Vec<ScoredFaq> {
        let message = message.to_lowercase();
        let message_is_priority = self
            .priority_terms
            .iter()
            .any(|term| message.contains(term));

        let words: Vec<&str> = message
            .split_whitespace()
            .filter(|w| w.len() > self.scoring.max_stopword_len)
            .collect();

        let mut scored: Vec<ScoredFaq> = faqs
            .iter()
            .filter_map(|faq| {
                let score = self.score_one(faq, &message, message_is_priority, &words);
                (score > self.scoring.threshold).then(|| ScoredFaq {
                    entry: faq.clone(),
                    score,
                })
            })
            .collect();

        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored
    }

    fn score_one(
        &self,
        faq: &FaqEntry,
        message: &str,
        message_is_priority: bool,
        words: &[&str],
    ) -> i32 {
        let question = faq.question.to_lowercase();
        let mut score = 0;

        // Policy-critical pairs outrank everything else
        if message_is_priority && self.priority_terms.iter().any(|t| question.contains(t)) {
            score += self.scoring.priority_boost;
        }

        // Paraphrase in either direction
        if question.contains(message) || message.contains(&question) {
            score += self.scoring.containment_bonus;
        }

        // Plain word overlap, short words excluded as stopword noise
        for word in words {
            if question.contains(word) {
                score += self.scoring.word_bonus;
            }
        }

        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> FaqRelevanceScorer {
        FaqRelevanceScorer::new(&Vocabulary::default())
    }

    fn faqs() -> Vec<FaqEntry> {
        vec![
            FaqEntry::new(
                "What is your return policy?",
                "14-day return window, unopened items only.",
            ),
            FaqEntry::new(
                "Do you offer a warranty on appliances?",
                "One year on all household appliances.",
            ),
            FaqEntry::new(
                "How long does delivery take?",
                "3-5 business days within the city.",
            ),
        ]
    }

    #[test]
    fn test_paraphrase_scores_above_threshold() {
        let results = scorer().score(&faqs(), "what is your refund policy");
        assert!(!results.is_empty());
        assert!(results[0].score > 5);
        assert!(results[0].entry.question.contains("return policy"));
    }

    #[test]
    fn test_unrelated_message_filters_out() {
        let results = scorer().score(
            &[FaqEntry::new(
                "What is your return policy?",
                "14-day return window.",
            )],
            "what time do you open",
        );
        assert!(results.is_empty());
    }

    #[test]
    fn test_priority_boost_outranks_word_overlap() {
        let results = scorer().score(&faqs(), "can I return my toaster for a refund");
        assert!(results[0].entry.question.contains("return"));
    }

    #[test]
    fn test_containment_bonus() {
        let results = scorer().score(&faqs(), "how long does delivery take");
        assert!(!results.is_empty());
        assert!(results[0].entry.question.contains("delivery"));
        // Exact containment plus word overlap
        assert!(results[0].score >= 10);
    }

    #[test]
    fn test_short_words_ignored() {
        // Every shared token is <= 3 chars, so only containment could score,
        // and these texts do not contain each other.
        let results = scorer().score(
            &[FaqEntry::new("Can I pay by COD?", "Yes.")],
            "do you it an me",
        );
        assert!(results.is_empty());
    }

    #[test]
    fn test_stable_tie_order() {
        let twins = vec![
            FaqEntry::new("Warranty for laptop purchases", "Two years."),
            FaqEntry::new("Laptop warranty details", "Two years."),
        ];
        let results = scorer().score(&twins, "warranty laptop");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].score, results[1].score);
        // Stable sort keeps insertion order on ties
        assert!(results[0].entry.question.starts_with("Warranty for"));
    }

    #[test]
    fn test_empty_faq_list() {
        assert!(scorer().score(&[], "return policy").is_empty());
    }
}
