use std::time::{Duration, Instant};

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use scraper::Html;
use url::Url;

use crate::cards::card_record::CardRecord;
use crate::error::ScrapeError;
use crate::html_extractor::extract_card;
use crate::utilities::http::browser_headers;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CardScrape {
    /// Fetches a product page. A failed fetch is an error, never a half filled record.
    async fn scrape(&self, url: &str) -> Result<CardRecord, ScrapeError>;
}

pub struct CardScraper {
    client: Client,
    timeout: Duration,
}

impl CardScraper {
    pub fn new(client: Client, timeout: Duration) -> Self {
        CardScraper { client, timeout }
    }
}

#[async_trait]
impl CardScrape for CardScraper {
    async fn scrape(&self, url: &str) -> Result<CardRecord, ScrapeError> {
        debug!("Scraping card data from URL: {}", url);
        let page_url = Url::parse(url)?;

        let start = Instant::now();
        let response = self
            .client
            .get(page_url.clone())
            .headers(browser_headers())
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?;
        let html_content = response.text().await?;
        debug!("fetching {} took {:?} ms", url, start.elapsed().as_millis());

        let document = Html::parse_document(&html_content);
        Ok(extract_card(&document, &page_url))
    }
}
