//! Chat - View Model

use contracts::domain::a002_chat::{ChatHistoryEntry, ChatRole};
use leptos::prelude::*;
use uuid::Uuid;

/// Shown in place of the reply when `/chat` fails
pub const APOLOGY_TEXT: &str = "Sorry, I'm having trouble connecting right now.";

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            text: text.into(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == ChatRole::User
    }
}

impl From<&ChatHistoryEntry> for ChatMessage {
    fn from(entry: &ChatHistoryEntry) -> Self {
        ChatMessage::new(entry.role, entry.text())
    }
}

#[derive(Clone, Copy)]
pub struct ChatVm {
    pub messages: RwSignal<Vec<ChatMessage>>,
    pub new_message: RwSignal<String>,
    pub is_sending: RwSignal<bool>,
}

impl ChatVm {
    pub fn new() -> Self {
        Self {
            messages: RwSignal::new(Vec::new()),
            new_message: RwSignal::new(String::new()),
            is_sending: RwSignal::new(false),
        }
    }

    pub fn has_started(&self) -> bool {
        self.messages.with(|m| !m.is_empty())
    }

    pub fn push(&self, message: ChatMessage) {
        self.messages.update(|m| m.push(message));
    }

    /// Takes the trimmed draft, `None` when there is nothing to send
    pub fn take_draft(&self) -> Option<String> {
        let draft = self.new_message.get_untracked();
        let text = draft.trim();
        if text.is_empty() {
            return None;
        }
        let text = text.to_string();
        self.new_message.set(String::new());
        Some(text)
    }
}

impl Default for ChatVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_history_to_messages() {
        let entries: Vec<ChatHistoryEntry> = serde_json::from_value(json!([
            {"role": "human", "content": "How much stock do I have?"},
            {"role": "ai", "content": "**1,200** units"}
        ]))
        .unwrap();
        let messages: Vec<ChatMessage> = entries.iter().map(ChatMessage::from).collect();

        assert!(messages[0].is_user());
        assert!(!messages[1].is_user());
        assert_eq!(messages[1].text, "**1,200** units");
        assert_ne!(messages[0].id, messages[1].id);
    }
}
