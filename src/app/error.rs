use thiserror::Error;

#[derive(Error, Debug)]
pub enum DigestError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed parsing error: {0}")]
    FeedParse(String),

    #[error("Failed to fetch feed {url}: {reason}")]
    FeedFetch { url: String, reason: String },

    #[error("Content fetch error: {0}")]
    ContentFetch(String),

    #[error("Completion service returned no content")]
    Generation,

    #[error("Completion service error: {0}")]
    Completion(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No http(s) URL found in selection")]
    NoUrlInSelection,
}

pub type Result<T> = std::result::Result<T, DigestError>;
