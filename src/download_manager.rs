use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use log::{debug, error, info, warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};

use crate::cards::downloaded_image::DownloadedImage;
use crate::error::ScrapeError;
use crate::utilities::constants::DOWNLOAD_CHUNK_SIZE;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageDownload {
    /// Saves every url that answers with an image as `<base_filename>_<i>.<ext>`.
    /// Urls that fail or are not images are skipped, so the result can be shorter than `urls`.
    async fn download(
        &self,
        urls: &[String],
        base_filename: &str,
    ) -> Result<Vec<DownloadedImage>, ScrapeError>;
}

pub struct DownloadManager {
    client: Client,
    destination: PathBuf,
    timeout: Duration,
}

/// File extension for an image media type, `None` when the response is not an image.
fn extension_for(content_type: &str) -> Option<String> {
    let media_type = content_type.split(';').next()?.trim().to_ascii_lowercase();
    if !media_type.starts_with("image") {
        return None;
    }
    let subtype = media_type.split('/').nth(1)?.trim();
    let subtype = subtype.split('+').next().unwrap_or(subtype);
    match subtype {
        "" => None,
        "jpeg" | "pjpeg" => Some("jpg".to_string()),
        other => Some(other.to_string()),
    }
}

impl DownloadManager {
    pub fn new(client: Client, destination: &str, timeout: Duration) -> Self {
        DownloadManager {
            client,
            destination: PathBuf::from(destination),
            timeout,
        }
    }

    async fn download_one(
        &self,
        url: &str,
        base_filename: &str,
        index: usize,
    ) -> Result<Option<PathBuf>, ScrapeError> {
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("")
            .to_string();

        let extension = match extension_for(&content_type) {
            Some(extension) => extension,
            None => {
                warn!(
                    "URL does not point to an image: {} (content-type: '{}')",
                    url, content_type
                );
                return Ok(None);
            }
        };

        let path = self
            .destination
            .join(format!("{}_{}.{}", base_filename, index, extension));

        if let Err(e) = Self::write_body(response, &path).await {
            if let Err(remove_error) = fs::remove_file(&path) {
                debug!(
                    "Could not remove partial file {}: {}",
                    path.display(),
                    remove_error
                );
            }
            return Err(e);
        }
        Ok(Some(path))
    }

    async fn write_body(response: Response, path: &Path) -> Result<(), ScrapeError> {
        let mut writer = BufWriter::with_capacity(DOWNLOAD_CHUNK_SIZE, File::create(path)?);
        let mut body = response.bytes_stream();
        while let Some(chunk) = body.next().await {
            writer.write_all(&chunk?)?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[async_trait]
impl ImageDownload for DownloadManager {
    async fn download(
        &self,
        urls: &[String],
        base_filename: &str,
    ) -> Result<Vec<DownloadedImage>, ScrapeError> {
        fs::create_dir_all(&self.destination)?;

        let mut downloaded = Vec::new();
        for (position, url) in urls.iter().enumerate() {
            let index = position + 1;
            match self.download_one(url, base_filename, index).await {
                Ok(Some(path)) => {
                    debug!(
                        "Image successfully downloaded and saved as: {}",
                        path.display()
                    );
                    downloaded.push(DownloadedImage {
                        path: path.to_string_lossy().to_string(),
                        index,
                    });
                }
                Ok(None) => {}
                Err(e) => error!("Failed to download image from {}: {}", url, e),
            }
        }

        info!(
            "Downloaded {} of {} images to {}",
            downloaded.len(),
            urls.len(),
            self.destination.display()
        );
        Ok(downloaded)
    }
}
