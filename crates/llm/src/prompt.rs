//! Prompt building for the generative fallback

use shop_agent_config::StoreProfile;

/// Builds the fallback prompt: persona instructions, short-term conversation
/// memory, and the current user message
///
/// The conversation window arrives pre-rendered (oldest first, alternating
/// `User:`/`Bot:` lines) so this builder stays independent of the history
/// store.
pub struct FallbackPrompt {
    store_name: String,
    context: String,
    message: String,
}

impl FallbackPrompt {
    pub fn new(profile: &StoreProfile) -> Self {
        Self {
            store_name: profile.name.clone(),
            context: String::new(),
            message: String::new(),
        }
    }

    /// Attach the rendered conversation window
    pub fn with_context(mut self, context: &str) -> Self {
        self.context = context.to_string();
        self
    }

    /// Attach the current user message
    pub fn user_message(mut self, message: &str) -> Self {
        self.message = message.to_string();
        self
    }

    /// Render the final prompt text
    pub fn build(self) -> String {
        let mut prompt = format!(
            "You are a helpful assistant for {}, an electronics store in Pakistan. \
             Keep responses concise (1-2 sentences max).",
            self.store_name
        );

        if !self.context.is_empty() {
            prompt.push_str("\nChat history:\n");
            prompt.push_str(&self.context);
        }

        prompt.push_str("\nUser: ");
        prompt.push_str(&self.message);
        prompt
    }
}
