use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::session::ChatSessionContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Sidebar state for the whole app
    provide_context(AppGlobalContext::new());

    // Chat session id, backed by localStorage
    provide_context(ChatSessionContext::new());

    view! {
        <AppRoutes />
    }
}
