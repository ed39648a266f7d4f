pub const PRICECHARTING_URL: &str = "https://www.pricecharting.com";
pub const SEARCH_PATH: &str = "/search-products";

pub const ASSETS_DIR: &str = "assets";

pub const MAX_SEARCH_RESULTS: usize = 5;

pub const UNKNOWN_CARD_NAME: &str = "Unknown Card";
pub const MISSING_PRICE: &str = "N/A";

pub const DOWNLOAD_CHUNK_SIZE: usize = 8192;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_IMAGE_TIMEOUT_SECS: u64 = 30;
