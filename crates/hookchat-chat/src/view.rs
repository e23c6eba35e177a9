use hookchat_types::{APP_SUBTITLE, APP_TITLE};

use crate::state::ConversationState;

pub const PLACEHOLDER_HEADING: &str = "Welcome to the Chatbot!";
pub const PLACEHOLDER_HINT: &str = "Send a message to get started.";
pub const PENDING_TEXT: &str = "Thinking...";
pub const INPUT_PLACEHOLDER: &str = "Type your message...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Bot replies
    Left,
    /// User messages
    Right,
}

/// One row of the message area
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewItem {
    Placeholder { heading: String, hint: String },
    Message { align: Alignment, content: String, time: String },
    Pending { text: String },
}

/// Everything the renderer needs, derived purely from state and input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatView {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<ViewItem>,
    pub error_banner: Option<String>,
    pub input: String,
    pub input_placeholder: String,
    pub input_enabled: bool,
    pub submit_enabled: bool,
}

impl ChatView {
    pub fn build(state: &ConversationState, input: &str) -> Self {
        let mut items: Vec<ViewItem> = state
            .messages()
            .iter()
            .map(|message| ViewItem::Message {
                align: if message.is_bot() { Alignment::Left } else { Alignment::Right },
                content: message.content().to_string(),
                time: message.local_time(),
            })
            .collect();

        if items.is_empty() {
            items.push(ViewItem::Placeholder {
                heading: PLACEHOLDER_HEADING.to_string(),
                hint: PLACEHOLDER_HINT.to_string(),
            });
        }

        if state.is_loading() {
            items.push(ViewItem::Pending {
                text: PENDING_TEXT.to_string(),
            });
        }

        Self {
            title: APP_TITLE.to_string(),
            subtitle: APP_SUBTITLE.to_string(),
            items,
            error_banner: state.error().map(|error| format!("Error: {}", error)),
            input: input.to_string(),
            input_placeholder: INPUT_PLACEHOLDER.to_string(),
            input_enabled: !state.is_loading(),
            submit_enabled: !state.is_loading() && !input.trim().is_empty(),
        }
    }

    /// Rendered messages, in display order
    pub fn messages(&self) -> impl Iterator<Item = &ViewItem> {
        self.items
            .iter()
            .filter(|item| matches!(item, ViewItem::Message { .. }))
    }
}
