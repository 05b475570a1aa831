//! PageFrame: root wrapper for every routed page.
//!
//! Sets `id` (`"{entity}--{category}"`) and `data-page-category` on the root
//! element, plus the BEM modifier class of the category.
//!
//! ```ignore
//! view! {
//!     <PageFrame page_id="d401_forecast--dashboard" category=PAGE_CAT_DASHBOARD>
//!         <div class="page__header">...</div>
//!         <div class="page__content">...</div>
//!     </PageFrame>
//! }
//! ```

use super::page_standard::*;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(
        is_valid_page_id(page_id, category),
        "page id {page_id} does not match category {category}"
    );

    let base_class = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_DETAIL => "page page--detail",
        _ => "page",
    };

    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div
            id=page_id
            class=full_class
            data-page-category=category
        >
            {children()}
        </div>
    }
}
