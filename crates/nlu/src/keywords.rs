//! Product keyword extraction
//!
//! Matches the curated vocabulary with word boundaries so "fan" never fires
//! inside "fantastic", plus a free-form phrase capture after search verbs for
//! product names the vocabulary does not know.

use once_cell::sync::Lazy;
use regex::Regex;

use shop_agent_config::Vocabulary;

/// Free-form phrase following a search verb, up to a price-clause boundary
static SEARCH_PHRASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?ix)
        \b(?:show\s+me|show|find\s+me|find|looking\s+for|do\s+you\s+have|
            search\s+for|searching\s+for|want\s+to\s+buy|need|want|buy)\s+
        (?:(?:a|an|any|some|the)\s+)?
        ([a-z0-9][a-z0-9\s]*?)
        (?:\s+(?:under|below|over|above|between|less|more|for|around|within|rs\b|in\s+stock)|[?.!,]|$)",
    )
    .expect("static regex")
});

/// One vocabulary keyword compiled for word-boundary matching
struct KeywordPattern {
    keyword: String,
    pattern: Regex,
}

/// Extracts known product keywords and free-form product phrases
pub struct ProductKeywordExtractor {
    patterns: Vec<KeywordPattern>,
}

impl ProductKeywordExtractor {
    /// Compile the vocabulary once at startup
    pub fn new(vocabulary: &Vocabulary) -> Self {
        let patterns = vocabulary
            .product_keywords
            .iter()
            .filter_map(|keyword| {
                // Plural-tolerant word-boundary match, case-insensitive
                let source = format!(r"(?i)\b{}s?\b", regex::escape(keyword));
                match Regex::new(&source) {
                    Ok(pattern) => Some(KeywordPattern {
                        keyword: keyword.clone(),
                        pattern,
                    }),
                    Err(e) => {
                        tracing::warn!(keyword, error = %e, "skipping uncompilable keyword");
                        None
                    }
                }
            })
            .collect();

        Self { patterns }
    }

    /// Whether the text mentions any vocabulary keyword at all
    ///
    /// Intent routing keys off this; the free-form phrase capture below is
    /// deliberately excluded so search verbs alone never look like a
    /// catalog query.
    pub fn has_known_keyword(&self, text: &str) -> bool {
        self.patterns.iter().any(|p| p.pattern.is_match(text))
    }

    /// Extract keywords, deduplicated, vocabulary order preserved
    ///
    /// Returns an empty vec (never an error) when nothing matches.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let mut found: Vec<String> = self
            .patterns
            .iter()
            .filter(|p| p.pattern.is_match(text))
            .map(|p| p.keyword.clone())
            .collect();

        found.dedup();

        if let Some(phrase) = self.search_phrase(text) {
            let covered = found
                .iter()
                .any(|kw| phrase.contains(&kw.to_lowercase()) || kw.to_lowercase().contains(&phrase));
            if !covered {
                found.push(phrase);
            }
        }

        found
    }

    /// Free-form product phrase after a search verb, when it is not already
    /// covered by the vocabulary
    fn search_phrase(&self, text: &str) -> Option<String> {
        let lowered = text.to_lowercase();
        let caps = SEARCH_PHRASE.captures(&lowered)?;
        let phrase = caps.get(1)?.as_str().trim().to_string();

        // An infinitive clause ("want to sleep") is not a product noun
        if phrase.is_empty() || phrase.starts_with("to ") || phrase.split_whitespace().count() > 4 {
            return None;
        }

        Some(phrase)
    }
}
