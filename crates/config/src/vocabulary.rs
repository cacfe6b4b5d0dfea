//! Rule vocabularies for slot extraction and FAQ scoring
//!
//! The curated keyword lists and scoring constants the deterministic rules
//! run on. Compiled-in defaults cover the storefront's catalog; a YAML file
//! can replace any section without touching the extractors.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::ConfigError;

/// Root vocabulary configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vocabulary {
    /// Product keywords matched with word boundaries (plural-tolerant)
    #[serde(default = "default_product_keywords")]
    pub product_keywords: Vec<String>,

    /// Category inference map; enumeration order is the tiebreak — the first
    /// category whose keyword set matches wins, categories are never combined
    #[serde(default = "default_categories")]
    pub categories: Vec<CategoryKeywords>,

    /// Terms that mark a message/question pair as policy-critical
    #[serde(default = "default_priority_terms")]
    pub faq_priority_terms: Vec<String>,

    /// FAQ relevance scoring constants
    #[serde(default)]
    pub scoring: ScoringConfig,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            product_keywords: default_product_keywords(),
            categories: default_categories(),
            faq_priority_terms: default_priority_terms(),
            scoring: ScoringConfig::default(),
        }
    }
}

impl Vocabulary {
    /// Load from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|_| ConfigError::FileNotFound(path.as_ref().display().to_string()))?;

        serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// All category names, in enumeration order
    pub fn category_names(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.name.clone()).collect()
    }
}

/// One category and the keywords that imply it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryKeywords {
    pub name: String,
    pub keywords: Vec<String>,
}

/// FAQ relevance scoring constants
///
/// Deliberately crude but explainable: tunable constants over term overlap,
/// so the ranking stays auditable without a trained model.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Added when both message and question contain a priority term
    #[serde(default = "default_priority_boost")]
    pub priority_boost: i32,
    /// Added when one text contains the other verbatim
    #[serde(default = "default_containment_bonus")]
    pub containment_bonus: i32,
    /// Added per message word found in the question
    #[serde(default = "default_word_bonus")]
    pub word_bonus: i32,
    /// Words at or below this length are ignored as stopword noise
    #[serde(default = "default_max_stopword_len")]
    pub max_stopword_len: usize,
    /// Entries scoring at or below this are dropped
    #[serde(default = "default_threshold")]
    pub threshold: i32,
}

fn default_priority_boost() -> i32 {
    15
}

fn default_containment_bonus() -> i32 {
    10
}

fn default_word_bonus() -> i32 {
    3
}

fn default_max_stopword_len() -> usize {
    3
}

fn default_threshold() -> i32 {
    5
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            priority_boost: default_priority_boost(),
            containment_bonus: default_containment_bonus(),
            word_bonus: default_word_bonus(),
            max_stopword_len: default_max_stopword_len(),
            threshold: default_threshold(),
        }
    }
}

fn default_product_keywords() -> Vec<String> {
    [
        // Device classes
        "laptop",
        "phone",
        "smartphone",
        "tv",
        "headphone",
        "camera",
        "watch",
        "smartwatch",
        "tablet",
        "monitor",
        "router",
        "speaker",
        "earbuds",
        // Household appliances
        "refrigerator",
        "fridge",
        "washing machine",
        "microwave",
        "oven",
        "blender",
        "toaster",
        "vacuum cleaner",
        "air conditioner",
        "fan",
        "heater",
        "iron",
        "water purifier",
        "juicer",
        "mixer",
        "dishwasher",
        "dryer",
        "cooker",
        "kettle",
        "grill",
        // Accessories
        "charger",
        "cable",
        "power bank",
        "adapter",
        "cover",
        "case",
        // Brands and model patterns
        "iphone",
        "iphone 14",
        "iphone 15",
        "samsung",
        "galaxy s23",
        "redmi",
        "redmi note 9",
        "dell",
        "hp",
        "sony",
        "lg",
        "haier",
        "dawlance",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_categories() -> Vec<CategoryKeywords> {
    vec![
        CategoryKeywords {
            name: "Electronics".to_string(),
            keywords: [
                "laptop",
                "phone",
                "smartphone",
                "tv",
                "camera",
                "tablet",
                "monitor",
                "iphone",
                "samsung",
                "redmi",
                "refrigerator",
                "fridge",
                "washing machine",
                "microwave",
                "oven",
                "air conditioner",
                "dishwasher",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        },
        CategoryKeywords {
            name: "Gadgets".to_string(),
            keywords: [
                "watch",
                "smartwatch",
                "earbuds",
                "headphone",
                "speaker",
                "router",
                "drone",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        },
        CategoryKeywords {
            name: "Accessories".to_string(),
            keywords: [
                "charger",
                "cable",
                "power bank",
                "adapter",
                "cover",
                "case",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        },
    ]
}

fn default_priority_terms() -> Vec<String> {
    [
        "return", "refund", "exchange", "policy", "warranty", "cancel", "shipping",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_vocabulary() {
        let vocab = Vocabulary::default();
        assert!(vocab.product_keywords.iter().any(|k| k == "laptop"));
        assert!(vocab.product_keywords.iter().any(|k| k == "iphone 14"));
        assert_eq!(
            vocab.category_names(),
            vec!["Electronics", "Gadgets", "Accessories"]
        );
    }

    #[test]
    fn test_default_scoring() {
        let scoring = ScoringConfig::default();
        assert_eq!(scoring.priority_boost, 15);
        assert_eq!(scoring.containment_bonus, 10);
        assert_eq!(scoring.word_bonus, 3);
        assert_eq!(scoring.threshold, 5);
    }

    #[test]
    fn test_load_from_yaml() {
        let mut file = tempfile::NamedTempFile::with_suffix(".yaml").unwrap();
        writeln!(
            file,
            r#"
product_keywords:
  - widget
categories:
  - name: Widgets
    keywords: [widget]
"#
        )
        .unwrap();

        let vocab = Vocabulary::load(file.path()).unwrap();
        assert_eq!(vocab.product_keywords, vec!["widget"]);
        assert_eq!(vocab.category_names(), vec!["Widgets"]);
        // Omitted sections fall back to defaults
        assert_eq!(vocab.scoring.threshold, 5);
        assert!(vocab.faq_priority_terms.iter().any(|t| t == "refund"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Vocabulary::load("/nonexistent/vocab.yaml");
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }
}
