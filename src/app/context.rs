use std::path::PathBuf;
use std::sync::Arc;

use crate::app::error::Result;
use crate::config::Config;
use crate::content::ContentFetcher;
use crate::digest::DigestWriter;
use crate::fetcher::{FeedFetcher, Fetcher, HttpFetcher};
use crate::host::{ConsoleNotifier, Notifier};
use crate::inline::InlineSummarizer;
use crate::pipeline::SummaryPipeline;
use crate::summarizer::{CompletionService, OpenAiClient, SummaryComposer};

/// Wires the configured services together for one CLI invocation.
pub struct AppContext {
    pub fetcher: Arc<dyn Fetcher + Send + Sync>,
    pub composer: SummaryComposer,
    pub notifier: Arc<dyn Notifier>,
    pub document_root: PathBuf,
}

impl AppContext {
    pub fn new(config: &Config, document_root: Option<PathBuf>) -> Result<Self> {
        let fetcher: Arc<dyn Fetcher + Send + Sync> =
            Arc::new(HttpFetcher::new(config.request_timeout())?);
        let service: Arc<dyn CompletionService> = Arc::new(OpenAiClient::from_config(config)?);

        Ok(Self {
            fetcher,
            composer: SummaryComposer::new(service),
            notifier: Arc::new(ConsoleNotifier),
            document_root: document_root.unwrap_or_else(|| config.resolve_document_root()),
        })
    }

    pub fn pipeline(&self) -> SummaryPipeline {
        SummaryPipeline::new(
            FeedFetcher::new(self.fetcher.clone()),
            self.composer.clone(),
            DigestWriter::new(&self.document_root),
            self.notifier.clone(),
        )
    }

    pub fn inline_summarizer(&self, config: &Config) -> Result<InlineSummarizer> {
        let content = ContentFetcher::from_config(&config.content, config.request_timeout())?;
        Ok(InlineSummarizer::new(
            content,
            self.composer.clone(),
            self.notifier.clone(),
        ))
    }
}
