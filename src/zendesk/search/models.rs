//! Search data models

use serde::Deserialize;
use serde_json::{Map, Value};

/// Sort direction of search results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// First page of a search, results left as raw JSON
///
/// Results mix record types; each carries a `result_type` field.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct SearchResults {
    #[serde(default)]
    pub results: Vec<Value>,
    pub count: Option<u64>,
    pub next_page: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SearchResults {
    /// Raw results of one record type (`ticket`, `user`, `organization`, `group`)
    pub fn of_type<'a>(&'a self, result_type: &'a str) -> impl Iterator<Item = &'a Value> + 'a {
        self.results
            .iter()
            .filter(move |r| r.get("result_type").and_then(Value::as_str) == Some(result_type))
    }
}
