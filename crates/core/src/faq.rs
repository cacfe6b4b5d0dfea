//! FAQ types

use serde::{Deserialize, Serialize};

/// A question/answer pair owned by the FAQ store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// An FAQ entry with its relevance score against one message
///
/// Ephemeral: created during scoring and discarded after the reply is built.
#[derive(Debug, Clone)]
pub struct ScoredFaq {
    pub entry: FaqEntry,
    pub score: i32,
}
