use std::time::{Duration, Instant};

use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use scraper::Html;
use url::Url;

use crate::cards::search_result::SearchResult;
use crate::error::ScrapeError;
use crate::html_extractor::extract_search_results;
use crate::utilities::constants::{MAX_SEARCH_RESULTS, SEARCH_PATH};
use crate::utilities::http::browser_headers;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CardSearch {
    /// Up to five candidates for `query`, in the site's order. An empty listing is `Ok(vec![])`.
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ScrapeError>;
}

pub struct SearchClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl SearchClient {
    pub fn new(base_url: &str, client: Client, timeout: Duration) -> Self {
        SearchClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    fn search_url(&self, query: &str) -> Result<Url, ScrapeError> {
        let endpoint = format!("{}{}", self.base_url, SEARCH_PATH);
        Ok(Url::parse_with_params(
            &endpoint,
            &[("type", "prices"), ("q", query), ("go", "Go")],
        )?)
    }
}

#[async_trait]
impl CardSearch for SearchClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ScrapeError> {
        let url = self.search_url(query)?;
        debug!("Generated search URL: {}", url);

        let start = Instant::now();
        let html_content = self
            .client
            .get(url.clone())
            .headers(browser_headers())
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        debug!("fetching {} took {:?} ms", url, start.elapsed().as_millis());

        let base_url = Url::parse(&self.base_url)?;
        let results = {
            let document = Html::parse_document(&html_content);
            extract_search_results(&document, &base_url, MAX_SEARCH_RESULTS)
        };

        if results.is_empty() {
            info!("No results found for '{}'", query);
        } else {
            info!("Found {} results for '{}'", results.len(), query);
        }
        Ok(results)
    }
}
