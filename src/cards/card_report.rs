use serde::{Deserialize, Serialize};

use super::{card_record::CardRecord, downloaded_image::DownloadedImage, price_table::PriceTable};
use crate::error::ScrapeError;

/// What gets printed to the operator, for each candidate and once more as the final output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardReport {
    pub name: String,
    pub prices: PriceTable,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image_files: Option<Vec<String>>,
}

impl CardReport {
    pub fn preview(card: &CardRecord) -> Self {
        CardReport {
            name: card.name.clone(),
            prices: card.prices.clone(),
            image_files: None,
        }
    }

    pub fn with_images(card: &CardRecord, images: &[DownloadedImage]) -> Self {
        CardReport {
            name: card.name.clone(),
            prices: card.prices.clone(),
            image_files: Some(images.iter().map(|image| image.path.clone()).collect()),
        }
    }

    pub fn to_pretty_json(&self) -> Result<String, ScrapeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
