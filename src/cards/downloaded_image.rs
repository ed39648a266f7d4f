use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadedImage {
    pub path: String,
    /// 1-based position of the source url in the list that was downloaded.
    pub index: usize,
}
