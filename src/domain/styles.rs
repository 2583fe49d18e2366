//! Style injection for notebook cells

use tracing::debug;

use crate::error::Result;
use crate::infrastructure::display::DisplaySink;

const STYLE_OPEN: &str = "<style>";
const STYLE_CLOSE: &str = "</style>";

/// Base stylesheet for tutorial notebooks, including its `<style>` wrapper
pub const BASE_STYLES: &str = r#"<style>
/* Font imports */
@import url('https://fonts.googleapis.com/css2?family=Montserrat:ital,wght@0,100..900;1,100..900&family=Source+Code+Pro:ital,wght@0,200..900;1,200..900&display=swap');

/* Variables */
:root {
    --primary-color: #05bfa5;
    --primary-light: #FAFAFA;
    --text-color: #2c3e50;
    --code-bg: #f8f8f8;
    --code-fg: #b22222;
    --success-color: #479269;
    --warning-color: #f39c12;
    --danger-color: #e74c3c;
    --border-radius: 8px;
    --spacing-sm: 0.3em;
    --spacing-md: 1em;
    --spacing-lg: 2em;
}

/* Container styles */
.h1-container, .h2-container, .h3-container {
    font-family: 'Montserrat', sans-serif;
    max-width: 95%;
    margin: var(--spacing-lg) auto;
    line-height: 1.6;
    color: var(--text-color);
}

/* List styles */
.feature-list {
    background-color: var(--primary-light);
    padding: var(--spacing-sm) var(--spacing-lg);
    border-radius: var(--border-radius);
    border-left: 4px solid var(--primary-color);
    margin: var(--spacing-md) 0;
}

/* Code styles */
.code-mention {
    font-family: 'Source Code Pro', monospace !important;
    background-color: var(--code-bg) !important;
    padding: 2px 5px;
    font-weight: 600 !important;
    border-radius: 4px;
    color: var(--code-fg) !important;
}

.code-block {
    background-color: var(--primary-light);
    border-left: 4px solid var(--primary-color);
    padding: var(--spacing-md);
    margin: var(--spacing-md) 0;
    border-radius: var(--border-radius);
    padding: var(--spacing-lg);
    max-width: 90%;
}

/* Information blocks */
.note-block, .notice-block {
    padding: var(--spacing-md);
    border-radius: var(--border-radius);
    margin: var(--spacing-md) 0;
}

.note-block {
    background-color: var(--primary-light);
    border-left: 4px solid var(--success-color);
}

.notice-block {
    background-color: var(--primary-light);
    border-left: 4px solid var(--warning-color);
}

.note-title {
    margin-top: 0;
    color: var(--success-color);
    font-weight: 600;
}

.feature-list:hover {
    background-color: #f0f0f0;
}
.code-block:hover {
    box-shadow: 0 4px 8px rgba(0, 0, 0, 0.1);
}

/* Utility styles */
.code-comment {
    color: #607d8b;
    font-style: italic;
}

.highlight {
    background-color: #fff176;
    padding: 2px 5px;
    border-radius: 3px;
}
</style>
"#;

/// Remove a `<style>` wrapper from user-supplied CSS.
///
/// Only strings that open with `<style>` are touched; every style tag in
/// them is then dropped.
pub fn strip_style_tags(custom_style: &str) -> String {
    if custom_style.trim_start().starts_with(STYLE_OPEN) {
        custom_style.replace(STYLE_OPEN, "").replace(STYLE_CLOSE, "")
    } else {
        custom_style.to_string()
    }
}

/// Combine the base stylesheet (when requested) with wrapped custom CSS
pub fn build_styles(use_base: bool, custom_style: &str) -> String {
    let custom = strip_style_tags(custom_style);
    let mut styles = String::new();
    if use_base {
        styles.push_str(BASE_STYLES);
    }
    if !custom.is_empty() {
        styles.push_str(STYLE_OPEN);
        styles.push_str(&custom);
        styles.push_str(STYLE_CLOSE);
    }
    debug!(use_base, custom_len = custom.len(), total_len = styles.len(), "built styles");
    styles
}

/// Inject styles into the display sink
pub fn apply_custom_styles(sink: &mut dyn DisplaySink, use_base: bool, custom_style: &str) -> Result<()> {
    sink.display_html(&build_styles(use_base, custom_style))
}
