//! Markdown to sanitized HTML for chat bubbles and the insight summary.

use pulldown_cmark::{html, Options, Parser};

/// Renders `source` as HTML with scripts, event handlers and unknown tags removed
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(source, options);
    let mut unsafe_html = String::new();
    html::push_html(&mut unsafe_html, parser);

    ammonia::clean(&unsafe_html)
}
