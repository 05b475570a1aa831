//! Chat UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: API functions
//! - view_model.rs: ChatVm with RwSignals
//! - view.rs: Main component ChatPage

mod model;
mod view;
mod view_model;

pub use view::ChatPage;
pub use view_model::{ChatMessage, ChatVm};
