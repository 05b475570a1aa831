//! Chat session id persisted in browser `localStorage`.

use leptos::prelude::*;

/// localStorage key of the chat session id
pub const SESSION_STORAGE_KEY: &str = "session_id";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Opaque chat session id shared by every page. Read from storage on first
/// use, written back whenever the chat service hands out an id, never cleared.
#[derive(Clone, Copy)]
pub struct ChatSessionContext {
    session_id: RwSignal<Option<String>>,
    loaded: StoredValue<bool>,
}

impl ChatSessionContext {
    pub fn new() -> Self {
        Self {
            session_id: RwSignal::new(None),
            loaded: StoredValue::new(false),
        }
    }

    pub fn session_id(&self) -> Option<String> {
        if !self.loaded.get_value() {
            let stored = storage()
                .and_then(|s| s.get_item(SESSION_STORAGE_KEY).ok().flatten())
                .filter(|id| !id.is_empty());
            self.session_id.set(stored);
            self.loaded.set_value(true);
        }
        self.session_id.get_untracked()
    }

    pub fn remember(&self, id: &str) {
        if let Some(storage) = storage() {
            if let Err(e) = storage.set_item(SESSION_STORAGE_KEY, id) {
                log::error!("Failed to persist chat session: {:?}", e);
            }
        }
        self.session_id.set(Some(id.to_string()));
        self.loaded.set_value(true);
    }
}

impl Default for ChatSessionContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_chat_session() -> ChatSessionContext {
    use_context::<ChatSessionContext>().expect("ChatSessionContext not found")
}
