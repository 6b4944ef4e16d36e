//! Selection rule for "spin" requests.

use crate::capture::HarEntry;

pub const DEFAULT_URL_CONTAINS: &str = "handler.ashx";
pub const DEFAULT_METHOD: &str = "POST";

/// A record matches when its URL contains `url_contains` and its method equals `method` exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchPredicate {
    pub url_contains: String,
    pub method: String,
}

impl MatchPredicate {
    pub fn new(url_contains: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            url_contains: url_contains.into(),
            method: method.into(),
        }
    }

    pub fn matches(&self, entry: &HarEntry) -> bool {
        entry.request.url.contains(&self.url_contains) && entry.request.method == self.method
    }
}

impl Default for MatchPredicate {
    fn default() -> Self {
        Self::new(DEFAULT_URL_CONTAINS, DEFAULT_METHOD)
    }
}
