pub mod aggregate;

pub use aggregate::{ChatCheckResponse, ChatHistoryEntry, ChatReply, ChatRequest, ChatRole};
