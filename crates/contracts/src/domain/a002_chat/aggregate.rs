use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Message author. The chat service tags assistant turns with `"ai"`;
/// every other role string is shown as the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChatRole {
    User,
    Ai,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Ai => "ai",
        }
    }
}

impl From<String> for ChatRole {
    fn from(value: String) -> Self {
        if value == "ai" {
            ChatRole::Ai
        } else {
            ChatRole::User
        }
    }
}

impl From<ChatRole> for String {
    fn from(role: ChatRole) -> Self {
        role.as_str().to_string()
    }
}

/// Body of `POST /chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

/// Reply of `POST /chat`. Depending on the backend version the text is in
/// `response` or in `message`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChatReply {
    /// Text to show in the assistant bubble: `response`, then `message`,
    /// then the raw payload as JSON.
    pub fn text(&self) -> String {
        if let Some(text) = self.response.as_deref().filter(|t| !t.is_empty()) {
            return text.to_string();
        }
        if let Some(text) = self.message.as_deref().filter(|t| !t.is_empty()) {
            return text.to_string();
        }
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// One stored turn returned by `/chat/check`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatHistoryEntry {
    pub role: ChatRole,
    #[serde(default)]
    pub content: Value,
}

impl ChatHistoryEntry {
    pub fn text(&self) -> String {
        match &self.content {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}

/// Response of `GET /chat/check`: the (possibly newly created) session and its history
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatCheckResponse {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default, deserialize_with = "history_or_empty")]
    pub history: Vec<ChatHistoryEntry>,
}

// Older backends answer `"history": false` for unknown sessions.
fn history_or_empty<'de, D>(deserializer: D) -> Result<Vec<ChatHistoryEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Array(_) => serde_json::from_value(value).map_err(serde::de::Error::custom),
        _ => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_role_mapping() {
        let entries: Vec<ChatHistoryEntry> = serde_json::from_value(json!([
            {"role": "ai", "content": "hello"},
            {"role": "human", "content": "hi"},
            {"role": "user", "content": 42}
        ]))
        .unwrap();

        assert_eq!(entries[0].role, ChatRole::Ai);
        assert_eq!(entries[1].role, ChatRole::User);
        assert_eq!(entries[2].role, ChatRole::User);
        assert_eq!(entries[2].text(), "42");
    }

    #[test]
    fn test_reply_text_fallbacks() {
        let reply: ChatReply = serde_json::from_value(json!({"response": "stock is fine"})).unwrap();
        assert_eq!(reply.text(), "stock is fine");

        let reply: ChatReply =
            serde_json::from_value(json!({"response": "", "message": "from message"})).unwrap();
        assert_eq!(reply.text(), "from message");

        let reply: ChatReply = serde_json::from_value(json!({"status": 201})).unwrap();
        assert_eq!(reply.text(), r#"{"status":201}"#);
    }

    #[test]
    fn test_check_response_tolerates_false_history() {
        let check: ChatCheckResponse =
            serde_json::from_value(json!({"history": false, "status": 200})).unwrap();
        assert!(check.session_id.is_none());
        assert!(check.history.is_empty());

        let check: ChatCheckResponse = serde_json::from_value(json!({
            "session_id": "abc",
            "history": [{"role": "user", "content": "q"}]
        }))
        .unwrap();
        assert_eq!(check.session_id.as_deref(), Some("abc"));
        assert_eq!(check.history.len(), 1);
    }

    #[test]
    fn test_request_omits_missing_session() {
        let body = serde_json::to_value(ChatRequest {
            message: "hi".to_string(),
            session_id: None,
        })
        .unwrap();
        assert_eq!(body, json!({"message": "hi"}));
    }
}
