//! Category inference
//!
//! Maps the keyword vocabulary onto a small fixed set of categories. The
//! first category (in configured enumeration order) whose keyword set
//! matches wins; categories are never combined, even when keywords from two
//! categories both appear.

use regex::Regex;

use shop_agent_config::Vocabulary;

struct CategoryPattern {
    name: String,
    patterns: Vec<Regex>,
}

/// Infers at most one product category from free text
pub struct CategoryInferer {
    categories: Vec<CategoryPattern>,
}

impl CategoryInferer {
    /// Compile category keyword sets once at startup
    pub fn new(vocabulary: &Vocabulary) -> Self {
        let categories = vocabulary
            .categories
            .iter()
            .map(|category| CategoryPattern {
                name: category.name.clone(),
                patterns: category
                    .keywords
                    .iter()
                    .filter_map(|keyword| {
                        let source = format!(r"(?i)\b{}s?\b", regex::escape(keyword));
                        match Regex::new(&source) {
                            Ok(p) => Some(p),
                            Err(e) => {
                                tracing::warn!(keyword, error = %e, "skipping uncompilable category keyword");
                                None
                            }
                        }
                    })
                    .collect(),
            })
            .collect();

        Self { categories }
    }

    /// The first matching category, or `None`
    pub fn infer(&self, text: &str) -> Option<String> {
        self.categories
            .iter()
            .find(|category| category.patterns.iter().any(|p| p.is_match(text)))
            .map(|category| category.name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inferer() -> CategoryInferer {
        CategoryInferer::new(&Vocabulary::default())
    }

    #[test]
    fn test_electronics() {
        assert_eq!(
            inferer().infer("looking for a laptop"),
            Some("Electronics".to_string())
        );
    }

    #[test]
    fn test_gadgets() {
        assert_eq!(
            inferer().infer("wireless earbuds please"),
            Some("Gadgets".to_string())
        );
    }

    #[test]
    fn test_accessories() {
        assert_eq!(
            inferer().infer("need a phone charger"),
            // "phone" hits Electronics first; enumeration order decides
            Some("Electronics".to_string())
        );
        assert_eq!(
            inferer().infer("need a fast charger"),
            Some("Accessories".to_string())
        );
    }

    #[test]
    fn test_first_match_wins_over_combined() {
        // Keywords from two categories: the first category in enumeration
        // order wins, they are never combined.
        assert_eq!(
            inferer().infer("a tv and a smartwatch"),
            Some("Electronics".to_string())
        );
    }

    #[test]
    fn test_no_match() {
        assert_eq!(inferer().infer("tell me a joke"), None);
    }
}
