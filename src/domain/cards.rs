//! Collapsible HTML cards for search results.
//!
//! Each call to [`render_cards`] draws a fresh run id and scopes every element
//! id it emits with it, so cards from separate calls rendered into the same
//! notebook never share ids and `toggleContent` addresses exactly one card.

use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::domain::search::{SearchResult, results_from_values};
use crate::error::Result;
use crate::infrastructure::constants::{CONTENT_ID_PREFIX, ICON_ID_PREFIX, TOGGLE_ICON};
use crate::infrastructure::display::DisplaySink;

/// Stylesheet for the card layout
pub const CARD_STYLES: &str = r#"
.result-container {
    font-family: 'Montserrat', sans-serif;
    display: flex;
    flex-direction: column;
    gap: 0.6em;
    max-width: 95%;
}

.result-card {
    border: 1px solid #e0e0e0;
    border-left: 4px solid #05bfa5;
    border-radius: 8px;
    background-color: #FAFAFA;
    overflow: hidden;
}

.result-header {
    cursor: pointer;
    padding: 0.6em 1em;
    color: #2c3e50;
}

.result-header:hover {
    background-color: #f0f0f0;
}

.result-link {
    color: #05bfa5;
    text-decoration: none;
    word-break: break-all;
}

.result-content {
    display: none;
    padding: 0 1em 1em 1em;
    color: #2c3e50;
    line-height: 1.6;
}
"#;

/// Client-side toggle used by the card headers
pub const TOGGLE_SCRIPT: &str = r#"
function toggleContent(contentId, iconId) {
    var content = document.getElementById(contentId);
    var icon = document.getElementById(iconId);
    if (!content || !icon) {
        return;
    }
    if (content.style.display === "block") {
        content.style.display = "none";
        icon.innerHTML = "&#9654;";
    } else {
        content.style.display = "block";
        icon.innerHTML = "&#9660;";
    }
}
"#;

/// Element ids for one card
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardIds {
    pub content_id: String,
    pub icon_id: String,
}

/// Markup produced by one rendering call
#[derive(Debug, Clone)]
pub struct RenderedCards {
    pub run_id: String,
    pub ids: Vec<CardIds>,
    pub markup: String,
}

/// Fresh 128-bit run id as 32 lowercase hex characters
pub fn new_run_id() -> String {
    Uuid::new_v4().simple().to_string()
}

pub fn card_ids(run_id: &str, index: usize) -> CardIds {
    CardIds {
        content_id: format!("{}-{}-{}", CONTENT_ID_PREFIX, run_id, index),
        icon_id: format!("{}-{}-{}", ICON_ID_PREFIX, run_id, index),
    }
}

/// Render results as cards scoped by a newly generated run id
pub fn render_cards(results: &[SearchResult]) -> RenderedCards {
    render_cards_with_run_id(&new_run_id(), results)
}

pub fn render_cards_with_run_id(run_id: &str, results: &[SearchResult]) -> RenderedCards {
    let mut markup = String::from("<div class='result-container'>");
    let mut ids = Vec::with_capacity(results.len());

    for (index, result) in results.iter().enumerate() {
        let card = card_ids(run_id, index);
        markup.push_str(&render_card(result, &card));
        ids.push(card);
    }
    markup.push_str("</div>");

    debug!(run_id, cards = results.len(), "rendered result cards");
    RenderedCards {
        run_id: run_id.to_string(),
        ids,
        markup,
    }
}

fn render_card(result: &SearchResult, ids: &CardIds) -> String {
    let url = escape_html(&result.url);
    let content = escape_html(&result.content);
    format!(
        r#"
<div class="result-card">
    <div class="result-header" onclick="toggleContent('{cid}', '{iid}')">
        <span>URL:</span> <a href="{url}" target="_blank" class="result-link">{url}</a>
        <span id="{iid}" style="float: right;">{icon}</span>
    </div>
    <div id="{cid}" class="result-content" style="display: none;">
        <p style="font-family: Montserrat"><strong>CONTENT:</strong><br><br> {content}</p>
    </div>
</div>
"#,
        cid = ids.content_id,
        iid = ids.icon_id,
        icon = TOGGLE_ICON,
    )
}

/// Cards plus their stylesheet and toggle script, viewable without a prepared notebook
pub fn render_standalone_cards(results: &[SearchResult]) -> String {
    let rendered = render_cards(results);
    format!(
        "<style>{}</style>\n<script>{}</script>\n{}",
        CARD_STYLES, TOGGLE_SCRIPT, rendered.markup
    )
}

/// Render results and hand the markup to `sink` in a single call.
///
/// `url` and `content` are HTML-escaped, so markup inside a snippet shows as
/// literal text.
pub fn display_search_results(sink: &mut dyn DisplaySink, results: &[SearchResult]) -> Result<()> {
    let rendered = render_cards(results);
    sink.display_html(&rendered.markup)
}

/// Like [`display_search_results`] for loosely-typed JSON objects.
///
/// Every entry is checked before anything is displayed.
pub fn display_search_result_values(sink: &mut dyn DisplaySink, values: &[Value]) -> Result<()> {
    let results = results_from_values(values)?;
    display_search_results(sink, &results)
}

fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::infrastructure::display::BufferSink;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::HashSet;

    fn sample(n: usize) -> Vec<SearchResult> {
        (0..n)
            .map(|i| SearchResult::new(format!("https://site{i}.example"), format!("snippet {i}")))
            .collect()
    }

    #[test]
    fn test_empty_input_yields_empty_container() {
        let rendered = render_cards(&[]);
        assert_eq!(rendered.markup, "<div class='result-container'></div>");
        assert!(rendered.ids.is_empty());
    }

    #[test]
    fn test_one_card_per_result_in_order() {
        let results = sample(4);
        let rendered = render_cards(&results);

        assert_eq!(rendered.markup.matches(r#"class="result-card""#).count(), 4);
        assert_eq!(rendered.ids.len(), 4);

        let positions: Vec<usize> = results
            .iter()
            .map(|r| rendered.markup.find(&r.content).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_ids_follow_run_and_index() {
        let rendered = render_cards_with_run_id("abc123", &sample(2));
        assert_eq!(
            rendered.ids[1],
            CardIds {
                content_id: "result-content-abc123-1".to_string(),
                icon_id: "icon-abc123-1".to_string(),
            }
        );
        assert!(
            rendered
                .markup
                .contains("toggleContent('result-content-abc123-0', 'icon-abc123-0')")
        );
        assert!(rendered.markup.contains(r#"<span id="icon-abc123-1""#));
        assert!(rendered.markup.contains(r#"<div id="result-content-abc123-1""#));
    }

    #[test]
    fn test_card_contains_link_icon_and_collapsed_content() {
        let rendered = render_cards_with_run_id("r", &[SearchResult::new("https://x.example/a", "body")]);
        assert!(rendered.markup.contains(
            r#"<a href="https://x.example/a" target="_blank" class="result-link">https://x.example/a</a>"#
        ));
        assert!(rendered.markup.contains(TOGGLE_ICON));
        assert!(rendered.markup.contains(r#"class="result-content" style="display: none;""#));
        assert!(rendered.markup.contains("<strong>CONTENT:</strong><br><br> body</p>"));
    }

    #[test]
    fn test_run_ids_are_hex_and_disjoint_between_calls() {
        let results = sample(5);
        let first = render_cards(&results);
        let second = render_cards(&results);

        assert_eq!(first.run_id.len(), 32);
        assert!(first.run_id.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(first.run_id, second.run_id);

        let first_ids: HashSet<_> = first.ids.iter().collect();
        assert!(second.ids.iter().all(|ids| !first_ids.contains(ids)));
    }

    #[test]
    fn test_markup_is_escaped() {
        let result = SearchResult::new("https://e.example/?a=1&b=\"2\"", "<script>alert('x')</script>");
        let rendered = render_cards_with_run_id("r", &[result]);
        assert!(!rendered.markup.contains("<script>"));
        assert!(rendered.markup.contains("&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;"));
        assert!(rendered.markup.contains("href=\"https://e.example/?a=1&amp;b=&quot;2&quot;\""));
    }

    #[test]
    fn test_display_sends_single_unit() {
        let mut sink = BufferSink::new();
        display_search_results(&mut sink, &sample(3)).unwrap();
        assert_eq!(sink.units().len(), 1);
        assert_eq!(sink.units()[0].matches(r#"class="result-card""#).count(), 3);
    }

    #[test]
    fn test_display_values_rejects_missing_field_without_output() {
        let mut sink = BufferSink::new();
        let values = vec![
            json!({"url": "https://ok.example", "content": "fine"}),
            json!({"url": "https://broken.example"}),
        ];
        let err = display_search_result_values(&mut sink, &values).unwrap_err();
        assert!(matches!(err, Error::MissingField { index: 1, field: "content" }));
        assert!(sink.units().is_empty());
    }

    #[test]
    fn test_standalone_bundles_styles_and_script() {
        let page = render_standalone_cards(&sample(1));
        assert!(page.starts_with("<style>"));
        assert!(page.contains("function toggleContent(contentId, iconId)"));
        assert!(page.contains("<div class='result-container'>"));
    }
}
