//! Daily digest generation.
//!
//! ```text
//! Idle → Initializing → ProcessingCategory(0) → ... → ProcessingCategory(n-1) → Completed
//! ```
//!
//! Categories are handled one at a time in configuration order, and so are
//! the feeds inside a category. A failing category gets a placeholder
//! section and the run moves on.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::app::{DigestError, Result};
use crate::config::feeds::Category;
use crate::config::Config;
use crate::digest::DigestWriter;
use crate::domain::CategoryBlock;
use crate::fetcher::FeedFetcher;
use crate::host::Notifier;
use crate::summarizer::SummaryComposer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    /// Artifact being created
    Initializing,
    /// Zero-based index of the category in flight
    ProcessingCategory(usize),
    Completed,
}

/// A category that ended up with the error placeholder.
#[derive(Debug)]
pub struct CategoryFailure {
    pub category: String,
    pub error: DigestError,
}

#[derive(Debug)]
pub struct PipelineReport {
    pub path: PathBuf,
    pub succeeded: Vec<String>,
    pub failures: Vec<CategoryFailure>,
    /// Feed items gathered across all categories
    pub item_count: usize,
}

pub struct SummaryPipeline {
    feed_fetcher: FeedFetcher,
    composer: SummaryComposer,
    writer: DigestWriter,
    notifier: Arc<dyn Notifier>,
    state: PipelineState,
}

impl SummaryPipeline {
    pub fn new(
        feed_fetcher: FeedFetcher,
        composer: SummaryComposer,
        writer: DigestWriter,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            feed_fetcher,
            composer,
            writer,
            notifier,
            state: PipelineState::Idle,
        }
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Generate the digest for `date`, overwriting any earlier one.
    ///
    /// Only artifact I/O errors end the run early; category failures are
    /// written into the digest and listed in the report.
    pub async fn run(&mut self, config: &Config, date: NaiveDate) -> Result<PipelineReport> {
        self.state = PipelineState::Initializing;
        let categories = config.feed_categories();
        let handle = self.writer.open(date)?;

        info!("Summarizing {} categories for {}", categories.len(), date);

        let mut report = PipelineReport {
            path: handle.path().to_path_buf(),
            succeeded: Vec::new(),
            failures: Vec::new(),
            item_count: 0,
        };

        for (index, category) in categories.iter().enumerate() {
            self.state = PipelineState::ProcessingCategory(index);
            info!("[{}/{}] {}", index + 1, categories.len(), category.name);

            let block = self.process_category(config, category).await;
            info!("{}: {} items", block.category, block.items.len());
            report.item_count += block.items.len();
            self.writer
                .append_section(&handle, &block.category, block.section_body())?;

            match block.generated {
                Ok(_) => report.succeeded.push(block.category),
                Err(error) => {
                    warn!("Category {} failed: {}", block.category, error);
                    report.failures.push(CategoryFailure {
                        category: block.category,
                        error,
                    });
                }
            }
        }

        self.state = PipelineState::Completed;
        info!(
            "Digest written to {} ({} ok, {} failed)",
            report.path.display(),
            report.succeeded.len(),
            report.failures.len()
        );
        self.notifier.notify(&format!(
            "News summary complete: {}",
            report.path.display()
        ));

        Ok(report)
    }

    async fn process_category(&self, config: &Config, category: &Category) -> CategoryBlock {
        let mut items = Vec::new();

        for url in &category.urls {
            match self.feed_fetcher.fetch(url, config.max_items_per_feed).await {
                Ok(mut feed_items) => items.append(&mut feed_items),
                Err(error) => {
                    return CategoryBlock {
                        category: category.name.clone(),
                        items,
                        generated: Err(error),
                    }
                }
            }
        }

        let generated = self
            .composer
            .summarize_category(&category.name, &items, &config.prompt_template, config.model)
            .await;

        CategoryBlock {
            category: category.name.clone(),
            items,
            generated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::ERROR_PLACEHOLDER;
    use crate::fetcher::feed::tests::{rss_with_items, StaticFetcher};
    use crate::host::notifier::tests::RecordingNotifier;
    use crate::summarizer::tests::ScriptedService;
    use crate::summarizer::FALLBACK_SUMMARY;
    use std::fs;
    use std::path::Path;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
    }

    fn config(feeds: &str) -> Config {
        Config {
            feeds: feeds.to_string(),
            prompt_template: "Summarize.".into(),
            max_items_per_feed: std::num::NonZeroUsize::new(2).unwrap(),
            ..Default::default()
        }
    }

    fn pipeline(
        root: &Path,
        fetcher: StaticFetcher,
        service: Arc<ScriptedService>,
        notifier: Arc<RecordingNotifier>,
    ) -> SummaryPipeline {
        SummaryPipeline::new(
            FeedFetcher::new(Arc::new(fetcher)),
            SummaryComposer::new(service),
            DigestWriter::new(root),
            notifier,
        )
    }

    fn feeds() -> StaticFetcher {
        StaticFetcher::new()
            .with("https://a/1", rss_with_items("a1", 3))
            .with("https://a/2", rss_with_items("a2", 1))
            .with("https://c/1", rss_with_items("c1", 1))
    }

    #[tokio::test]
    async fn test_failed_category_does_not_abort_run() {
        let dir = tempfile::tempdir().unwrap();
        let notifier = Arc::new(RecordingNotifier::default());
        let mut pipeline = pipeline(
            dir.path(),
            feeds(),
            Arc::new(ScriptedService::echo()),
            notifier.clone(),
        );
        let config = config("# A\nhttps://a/1\n# B\nhttps://broken/feed\n# C\nhttps://c/1\n");

        let report = pipeline.run(&config, date()).await.unwrap();

        assert_eq!(report.succeeded, vec!["A", "C"]);
        assert_eq!(report.item_count, 3);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].category, "B");
        assert!(matches!(report.failures[0].error, DigestError::FeedFetch { .. }));

        let content = fs::read_to_string(&report.path).unwrap();
        assert_eq!(
            content,
            format!(
                "# News Summary for 2024-03-07\n\n\
                 ## A\n\nSummary of Category: A\n\n---\n\n\
                 ## B\n\n{}\n\n---\n\n\
                 ## C\n\nSummary of Category: C\n\n---\n\n",
                ERROR_PLACEHOLDER
            )
        );
        assert_eq!(pipeline.state(), PipelineState::Completed);
        assert_eq!(
            notifier.messages(),
            vec![format!("News summary complete: {}", report.path.display())]
        );
    }

    #[tokio::test]
    async fn test_items_concatenated_across_feeds() {
        let dir = tempfile::tempdir().unwrap();
        let service = Arc::new(ScriptedService::echo());
        let mut pipeline = pipeline(
            dir.path(),
            feeds(),
            service.clone(),
            Arc::new(RecordingNotifier::default()),
        );

        let report = pipeline
            .run(&config("# A\nhttps://a/1\nhttps://a/2\n"), date())
            .await
            .unwrap();
        assert_eq!(report.item_count, 3);

        let prompts = service.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert_eq!(
            prompts[0],
            "Category: A\n\n\
             - **[a1 1](https://example.com/a1/1)**: About a1 1\n\
             - **[a1 2](https://example.com/a1/2)**: About a1 2\n\
             - **[a2 1](https://example.com/a2/1)**: About a2 1\n\n\
             Summarize."
        );
    }

    #[tokio::test]
    async fn test_generation_failure_isolated() {
        let dir = tempfile::tempdir().unwrap();
        let service = Arc::new(ScriptedService::new(vec![
            Err(DigestError::Completion("overloaded".into())),
            Ok(None),
        ]));
        let mut pipeline = pipeline(
            dir.path(),
            feeds(),
            service,
            Arc::new(RecordingNotifier::default()),
        );

        let report = pipeline
            .run(&config("# A\nhttps://a/1\n# C\nhttps://c/1\n"), date())
            .await
            .unwrap();

        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].category, "A");
        let content = fs::read_to_string(&report.path).unwrap();
        assert!(content.contains(&format!("## A\n\n{}", ERROR_PLACEHOLDER)));
        assert!(content.contains(&format!("## C\n\n{}", FALLBACK_SUMMARY)));
    }

    #[tokio::test]
    async fn test_rerun_same_day_is_identical() {
        let dir = tempfile::tempdir().unwrap();
        let config = config("# A\nhttps://a/1\n# B\nhttps://broken\n");

        let mut first = pipeline(
            dir.path(),
            feeds(),
            Arc::new(ScriptedService::echo()),
            Arc::new(RecordingNotifier::default()),
        );
        let report = first.run(&config, date()).await.unwrap();
        let first_bytes = fs::read(&report.path).unwrap();

        let mut second = pipeline(
            dir.path(),
            feeds(),
            Arc::new(ScriptedService::echo()),
            Arc::new(RecordingNotifier::default()),
        );
        second.run(&config, date()).await.unwrap();

        assert_eq!(fs::read(&report.path).unwrap(), first_bytes);
    }

    #[tokio::test]
    async fn test_no_categories_writes_title_only() {
        let dir = tempfile::tempdir().unwrap();
        let notifier = Arc::new(RecordingNotifier::default());
        let mut pipeline = pipeline(
            dir.path(),
            feeds(),
            Arc::new(ScriptedService::echo()),
            notifier.clone(),
        );
        assert_eq!(pipeline.state(), PipelineState::Idle);

        let report = pipeline.run(&config(""), date()).await.unwrap();

        assert_eq!(
            fs::read_to_string(&report.path).unwrap(),
            "# News Summary for 2024-03-07\n\n"
        );
        assert_eq!(notifier.messages().len(), 1);
    }
}
