use serde::{Deserialize, Serialize};

/// One row of the search listing. `url` is always absolute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub name: String,
    pub url: String,
}

impl SearchResult {
    pub fn new(name: &str, url: &str) -> Self {
        SearchResult {
            name: name.to_string(),
            url: url.to_string(),
        }
    }
}
