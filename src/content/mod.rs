//! Single-URL content retrieval for inline summaries.
//!
//! # Architecture
//!
//! ```text
//! selection URL → clean → proxy URL → [ProxyTransport, CommandTransport] → label check
//! ```
//!
//! Transports are tried in order and the first success wins. The text that
//! comes back must carry at least one of the configured section labels
//! (`Title:`, `Markdown Content:`, ...), otherwise it is reported as
//! [`FetchedContent::Unusable`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use news_digest::content::{ContentConfig, ContentFetcher, FetchedContent};
//!
//! let fetcher = ContentFetcher::from_config(&ContentConfig::default(), timeout)?;
//! match fetcher.fetch("https://example.com/article)").await? {
//!     FetchedContent::Markdown(text) => println!("{text}"),
//!     FetchedContent::Unusable => eprintln!("nothing readable"),
//! }
//! ```

mod command;
mod config;
mod proxy;

pub use command::CommandTransport;
pub use config::ContentConfig;
pub use proxy::ProxyTransport;

use std::time::Duration;

use async_trait::async_trait;

use crate::app::{DigestError, Result};

/// A way of retrieving the text behind a URL
#[async_trait]
pub trait Transport: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    async fn get(&self, url: &str) -> Result<String>;
}

/// Outcome of a content fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchedContent {
    /// Extracted page text, ready to be summarized
    Markdown(String),
    /// The fetch succeeded but the text does not look like extracted content
    Unusable,
}

pub struct ContentFetcher {
    config: ContentConfig,
    transports: Vec<Box<dyn Transport>>,
}

impl ContentFetcher {
    pub fn new(config: ContentConfig, transports: Vec<Box<dyn Transport>>) -> Self {
        Self { config, transports }
    }

    /// Proxy transport first, then the command fallback when enabled
    pub fn from_config(config: &ContentConfig, timeout: Duration) -> Result<Self> {
        let mut transports: Vec<Box<dyn Transport>> = vec![Box::new(ProxyTransport::new(timeout)?)];

        if config.fallback_enabled {
            if let Some(command) = CommandTransport::from_args(&config.fallback_command) {
                transports.push(Box::new(command));
            }
        }

        Ok(Self::new(config.clone(), transports))
    }

    pub async fn fetch(&self, url: &str) -> Result<FetchedContent> {
        let target = clean_url(url);
        let request_url = self.config.request_url(target);

        let mut last_error = None;
        for transport in &self.transports {
            match transport.get(&request_url).await {
                Ok(text) => {
                    tracing::debug!(
                        "Fetched {} bytes for {} via {}",
                        text.len(),
                        target,
                        transport.name()
                    );
                    return Ok(self.validate(text));
                }
                Err(e) => {
                    tracing::warn!("{} transport failed for {}: {}", transport.name(), target, e);
                    last_error = Some(e);
                }
            }
        }

        Err(DigestError::ContentFetch(match last_error {
            Some(e) => e.to_string(),
            None => "no transports configured".to_string(),
        }))
    }

    fn validate(&self, text: String) -> FetchedContent {
        if self.config.looks_usable(&text) {
            FetchedContent::Markdown(text)
        } else {
            FetchedContent::Unusable
        }
    }
}

/// Strip trailing `)` left over from Markdown link syntax
pub fn clean_url(url: &str) -> &str {
    url.trim().trim_end_matches(')')
}
