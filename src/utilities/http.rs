use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client;

use crate::error::ScrapeError;

/// Headers sent with search and product page requests so the site serves the regular html.
pub fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert("User-Agent", HeaderValue::from_static("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"));
    headers.insert(
        "accept",
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
        ),
    );
    headers.insert("accept-language", HeaderValue::from_static("en-US,en;q=0.5"));
    headers.insert(
        "referer",
        HeaderValue::from_static("https://www.pricecharting.com/"),
    );
    headers.insert("dnt", HeaderValue::from_static("1"));
    headers.insert("connection", HeaderValue::from_static("keep-alive"));
    headers.insert("upgrade-insecure-requests", HeaderValue::from_static("1"));
    headers
}

pub fn build_client() -> Result<Client, ScrapeError> {
    Ok(Client::builder().build()?)
}
