//! Pure extraction of pricecharting pages. Nothing in here touches the network.

use log::{debug, warn};
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::cards::{
    card_record::CardRecord, grade::Grade, price_table::PriceTable, search_result::SearchResult,
};
use crate::utilities::{constants::UNKNOWN_CARD_NAME, string_manipulators::strip_query};

lazy_static::lazy_static! {
    static ref SEARCH_RESULT_LINK: Selector = Selector::parse("td.title a").expect("search result selector");
    static ref PRODUCT_TITLE: Selector = Selector::parse("h1.product-title").expect("product title selector");
    static ref ITEMPROP_NAME: Selector = Selector::parse(r#"h1[itemprop="name"]"#).expect("itemprop selector");
    static ref HEADING: Selector = Selector::parse("h1").expect("heading selector");
    static ref DOCUMENT_TITLE: Selector = Selector::parse("title").expect("title selector");
    static ref TABLE_CELL: Selector = Selector::parse("td").expect("table cell selector");
    static ref DIALOG_IMAGE: Selector = Selector::parse("img.js-show-dialog").expect("image selector");
}

type NameStrategy = fn(&Html) -> Option<String>;

/// Tried in order, the first one giving a non-empty name wins.
const NAME_STRATEGIES: [NameStrategy; 4] =
    [product_title, itemprop_name, first_heading, document_title];

fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn first_text(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .map(|element| element_text(&element))
        .filter(|text| !text.is_empty())
}

fn product_title(document: &Html) -> Option<String> {
    first_text(document, &PRODUCT_TITLE)
}

fn itemprop_name(document: &Html) -> Option<String> {
    first_text(document, &ITEMPROP_NAME)
}

fn first_heading(document: &Html) -> Option<String> {
    first_text(document, &HEADING)
}

fn document_title(document: &Html) -> Option<String> {
    first_text(document, &DOCUMENT_TITLE)
}

/// Candidates from a search listing page, at most `limit`, in the order the site ranked them.
pub fn extract_search_results(document: &Html, base_url: &Url, limit: usize) -> Vec<SearchResult> {
    document
        .select(&SEARCH_RESULT_LINK)
        .filter_map(|link| {
            let href = link.value().attr("href")?;
            match base_url.join(href.trim()) {
                Ok(url) => Some(SearchResult::new(&element_text(&link), url.as_str())),
                Err(e) => {
                    warn!("Skipping search result with bad href '{}': {}", href, e);
                    None
                }
            }
        })
        .take(limit)
        .collect()
}

pub fn extract_name(document: &Html) -> String {
    match NAME_STRATEGIES.iter().find_map(|strategy| strategy(document)) {
        Some(name) => {
            debug!("Found card name: {}", name);
            name
        }
        None => {
            debug!("Could not find card name");
            UNKNOWN_CARD_NAME.to_string()
        }
    }
}

/// The cell right after the one reading exactly `PSA <grade>`.
fn price_for_grade(document: &Html, grade: Grade) -> Option<String> {
    let label = grade.cell_label();
    let label_cell = document
        .select(&TABLE_CELL)
        .find(|cell| element_text(cell) == label)?;

    label_cell
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|sibling| sibling.value().name() == "td")
        .map(|price_cell| element_text(&price_cell))
}

pub fn extract_prices(document: &Html) -> PriceTable {
    let prices = PriceTable::from_lookup(|grade| price_for_grade(document, grade));
    for grade in Grade::ALL {
        debug!("Found {} price for {}: {}", grade, grade.key(), prices.get(grade));
    }
    prices
}

/// Gallery images, absolute and without query parameters. Duplicates are kept.
pub fn extract_image_urls(document: &Html, page_url: &Url) -> Vec<String> {
    let image_urls: Vec<String> = document
        .select(&DIALOG_IMAGE)
        .filter_map(|img| {
            let source = img
                .value()
                .attr("src")
                .filter(|src| !src.trim().is_empty())
                .or_else(|| {
                    img.value()
                        .attr("data-src")
                        .filter(|src| !src.trim().is_empty())
                })?;

            match page_url.join(source.trim()) {
                Ok(url) if url.has_host() => Some(strip_query(url.as_str())),
                Ok(url) => {
                    debug!("Skipping image without a host: {}", url);
                    None
                }
                Err(e) => {
                    warn!("Skipping image with bad source '{}': {}", source, e);
                    None
                }
            }
        })
        .collect();

    debug!("Found image URLs: {:?}", image_urls);
    image_urls
}

pub fn extract_card(document: &Html, page_url: &Url) -> CardRecord {
    CardRecord {
        name: extract_name(document),
        prices: extract_prices(document),
        image_urls: extract_image_urls(document, page_url),
    }
}
