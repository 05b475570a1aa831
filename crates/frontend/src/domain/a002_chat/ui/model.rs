//! Chat - Model (API functions)

use crate::shared::api_utils::{api_url, get_json, post_json, url_with_query};
use contracts::domain::a002_chat::{ChatCheckResponse, ChatReply, ChatRequest};
use contracts::shared::api_error::ApiError;
use serde::Serialize;

#[derive(Serialize)]
struct CheckQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    session_id: Option<&'a str>,
}

/// Fetch or create the session and its history
pub async fn check_session(session_id: Option<&str>) -> Result<ChatCheckResponse, ApiError> {
    get_json(&url_with_query("/chat/check", &CheckQuery { session_id })).await
}

/// Send one user turn and wait for the assistant reply
pub async fn send_message(message: &str, session_id: Option<String>) -> Result<ChatReply, ApiError> {
    let body = ChatRequest {
        message: message.to_string(),
        session_id,
    };
    post_json(&api_url("/chat"), &body).await
}
