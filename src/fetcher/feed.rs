use std::num::NonZeroUsize;
use std::sync::Arc;

use url::Url;

use crate::app::{DigestError, Result};
use crate::domain::FeedItemSummary;
use crate::fetcher::Fetcher;
use crate::normalizer::Normalizer;

/// Fetches a single feed and returns its leading items.
pub struct FeedFetcher {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    normalizer: Normalizer,
}

impl FeedFetcher {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        Self {
            fetcher,
            normalizer: Normalizer::new(),
        }
    }

    /// Fetch `feed_url` and keep the first `max_items` entries in feed order.
    ///
    /// Any transport or parse failure is reported as [`DigestError::FeedFetch`].
    pub async fn fetch(
        &self,
        feed_url: &str,
        max_items: NonZeroUsize,
    ) -> Result<Vec<FeedItemSummary>> {
        Url::parse(feed_url).map_err(|e| feed_error(feed_url, e.into()))?;

        let body = self
            .fetcher
            .fetch(feed_url)
            .await
            .map_err(|e| feed_error(feed_url, e))?;

        let mut items = self
            .normalizer
            .normalize(&body)
            .map_err(|e| feed_error(feed_url, e))?;

        items.truncate(max_items.get());
        tracing::debug!("Took {} items from {}", items.len(), feed_url);
        Ok(items)
    }
}

fn feed_error(url: &str, err: DigestError) -> DigestError {
    DigestError::FeedFetch {
        url: url.to_string(),
        reason: err.to_string(),
    }
}
