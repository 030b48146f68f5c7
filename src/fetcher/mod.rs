pub mod feed;
pub mod http_fetcher;

use async_trait::async_trait;

use crate::app::Result;

pub use feed::FeedFetcher;
pub use http_fetcher::HttpFetcher;

/// Retrieves the raw bytes behind a URL.
#[async_trait]
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}
