//! Conversation window rendering
//!
//! Short-term memory for the generative fallback: the last few exchanges,
//! rendered oldest-first as alternating `User:`/`Bot:` lines. Scoping the
//! history to the right user is the caller's contract; this function only
//! formats what it is given.

use shop_agent_core::ChatExchange;

/// Render the last `n` exchanges (input newest-first, as the history store
/// returns them) into a prompt-ready transcript
pub fn render_window(history: &[ChatExchange], n: usize) -> String {
    let mut window: Vec<&ChatExchange> = history.iter().take(n).collect();
    window.reverse();

    window
        .iter()
        .map(|e| format!("User: {}\nBot: {}", e.message, e.reply))
        .collect::<Vec<_>>()
        .join("\n")
}
