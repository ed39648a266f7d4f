use serde::{Deserialize, Serialize};

use super::price_table::PriceTable;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub name: String,
    pub prices: PriceTable,
    pub image_urls: Vec<String>,
}
