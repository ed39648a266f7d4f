use std::fmt;

#[derive(Debug)]
pub enum ScrapeError {
    Request(reqwest::Error),
    Url(url::ParseError),
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl From<reqwest::Error> for ScrapeError {
    fn from(err: reqwest::Error) -> Self {
        ScrapeError::Request(err)
    }
}

impl From<url::ParseError> for ScrapeError {
    fn from(err: url::ParseError) -> Self {
        ScrapeError::Url(err)
    }
}

impl From<std::io::Error> for ScrapeError {
    fn from(err: std::io::Error) -> Self {
        ScrapeError::Io(err)
    }
}

impl From<serde_json::Error> for ScrapeError {
    fn from(err: serde_json::Error) -> Self {
        ScrapeError::Json(err)
    }
}

impl fmt::Display for ScrapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScrapeError::Request(e) => write!(f, "request failed: {}", e),
            ScrapeError::Url(e) => write!(f, "invalid url: {}", e),
            ScrapeError::Io(e) => write!(f, "io error: {}", e),
            ScrapeError::Json(e) => write!(f, "could not serialize report: {}", e),
        }
    }
}

impl std::error::Error for ScrapeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScrapeError::Request(e) => Some(e),
            ScrapeError::Url(e) => Some(e),
            ScrapeError::Io(e) => Some(e),
            ScrapeError::Json(e) => Some(e),
        }
    }
}
