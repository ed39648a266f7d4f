use std::env;
use std::time::Duration;

use log::error;

use super::constants::{
    ASSETS_DIR, DEFAULT_IMAGE_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS, PRICECHARTING_URL,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub base_url: String,
    pub assets_dir: String,
    pub request_timeout_secs: u64,
    pub image_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: PRICECHARTING_URL.to_string(),
            assets_dir: ASSETS_DIR.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            image_timeout_secs: DEFAULT_IMAGE_TIMEOUT_SECS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        let mut config = Config::default();
        config.update_from_env();
        config
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn image_timeout(&self) -> Duration {
        Duration::from_secs(self.image_timeout_secs)
    }

    fn update_from_env(&mut self) {
        self.apply(|key| env::var(key).ok());
    }

    fn apply<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup("PRICECHARTING_URL") {
            if !base_url.trim().is_empty() {
                self.base_url = base_url.trim().trim_end_matches('/').to_string();
            }
        }
        if let Some(assets_dir) = lookup("ASSETS_DIR") {
            if !assets_dir.trim().is_empty() {
                self.assets_dir = assets_dir;
            }
        }
        if let Some(timeout) = lookup("REQUEST_TIMEOUT_SECS") {
            match timeout.trim().parse() {
                Ok(secs) => self.request_timeout_secs = secs,
                Err(_) => error!(
                    "Supplied incorrect REQUEST_TIMEOUT_SECS '{}', keeping {}",
                    timeout, self.request_timeout_secs
                ),
            }
        }
        if let Some(timeout) = lookup("IMAGE_TIMEOUT_SECS") {
            match timeout.trim().parse() {
                Ok(secs) => self.image_timeout_secs = secs,
                Err(_) => error!(
                    "Supplied incorrect IMAGE_TIMEOUT_SECS '{}', keeping {}",
                    timeout, self.image_timeout_secs
                ),
            }
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: Config = Config::new();
}
