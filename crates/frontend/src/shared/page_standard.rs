//! Page category constants.
//!
//! Every routed page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"d401_forecast--dashboard"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the id searchable: copy it from the DOM inspector
//! and the entity part leads to the module directory.

/// Analytical dashboard / chart view.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Use-case wizard / action page (uploads etc.).
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Conversation page of a domain entity.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Shell-level pages (not found).
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_USECASE,
    PAGE_CAT_DETAIL,
    PAGE_CAT_SYSTEM,
];

/// Checks the `{entity}--{category}` shape of a page id
pub fn is_valid_page_id(page_id: &str, category: &str) -> bool {
    match page_id.split_once("--") {
        Some((entity, cat)) => !entity.is_empty() && cat == category,
        None => false,
    }
}
