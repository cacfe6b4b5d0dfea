//! Price range extraction
//!
//! Parses informal rupee expressions ("under 50k", "between rs.1,000 and
//! rs.5,000") into structured bounds. Whole rupees only; thousands
//! separators are stripped before parsing.

use once_cell::sync::Lazy;
use regex::Regex;

use shop_agent_core::PriceRange;

/// `50k` / `50 K` shorthand, normalized before any other pattern runs
static THOUSANDS_SHORTHAND: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(\d[\d,]*)\s*k\b").expect("static regex"));

/// `under|below|less than <amount>`
static UPPER_BOUND: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:under|below|less\s+than)\s+(?:rs\.?\s*)?(\d[\d,]*)").expect("static regex")
});

/// `over|above|more than <amount>`
static LOWER_BOUND: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:over|above|more\s+than)\s+(?:rs\.?\s*)?(\d[\d,]*)").expect("static regex")
});

/// `between <a> and <b>` or `<a> to <b>`
static BOUNDED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:between\s+)?(?:rs\.?\s*)?(\d[\d,]*)\s+(?:and|to)\s+(?:rs\.?\s*)?(\d[\d,]*)",
    )
    .expect("static regex")
});

/// bare `rs. <amount>` (exact price)
static EXACT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\brs\.?\s*(\d[\d,]*)").expect("static regex"));

/// Extracts a [`PriceRange`] from free text
///
/// Rules are tried in a fixed order and the first match wins. A miss returns
/// `None`; callers must not default to a numeric zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceRangeExtractor;

impl PriceRangeExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract a price range, if any pattern matches
    pub fn extract(&self, text: &str) -> Option<PriceRange> {
        let text = normalize_thousands(text);

        if let Some(caps) = UPPER_BOUND.captures(&text) {
            return parse_amount(&caps[1]).map(PriceRange::at_most);
        }

        if let Some(caps) = LOWER_BOUND.captures(&text) {
            return parse_amount(&caps[1]).map(PriceRange::at_least);
        }

        if let Some(caps) = BOUNDED.captures(&text) {
            if let (Some(min), Some(max)) = (parse_amount(&caps[1]), parse_amount(&caps[2])) {
                return Some(PriceRange::between(min, max));
            }
        }

        if let Some(caps) = EXACT.captures(&text) {
            return parse_amount(&caps[1]).map(PriceRange::exact);
        }

        None
    }
}

/// Rewrite `<number>k` as the expanded amount so later patterns see plain
/// digits ("under 50k" becomes "under 50000")
fn normalize_thousands(text: &str) -> String {
    THOUSANDS_SHORTHAND
        .replace_all(text, |caps: &regex::Captures<'_>| {
            match parse_amount(&caps[1]) {
                Some(n) => (n * 1000).to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Parse an amount after stripping thousands separators
fn parse_amount(raw: &str) -> Option<i64> {
    raw.replace(',', "").parse::<i64>().ok()
}
