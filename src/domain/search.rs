use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// One search hit as returned by a search tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub url: String,
    pub content: String,
}

impl SearchResult {
    pub fn new(url: impl Into<String>, content: impl Into<String>) -> Self {
        SearchResult {
            url: url.into(),
            content: content.into(),
        }
    }

    /// Extract a result from a loosely-typed JSON object.
    ///
    /// Extra keys are ignored. Non-string values are kept as their JSON text.
    pub fn from_value(index: usize, value: &Value) -> Result<Self> {
        let object = value.as_object().ok_or(Error::NotAnObject { index })?;
        let field = |name: &'static str| {
            object
                .get(name)
                .map(value_text)
                .ok_or(Error::MissingField { index, field: name })
        };
        Ok(SearchResult {
            url: field("url")?,
            content: field("content")?,
        })
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Convert a list of JSON objects, failing on the first malformed entry
pub fn results_from_values(values: &[Value]) -> Result<Vec<SearchResult>> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| SearchResult::from_value(index, value))
        .collect()
}

/// Parse a JSON array of result objects
pub fn parse_results(json: &str) -> Result<Vec<SearchResult>> {
    let values: Vec<Value> = serde_json::from_str(json)?;
    results_from_values(&values)
}
