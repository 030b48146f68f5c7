//! Summarize the URL in the current selection and insert the result below it.

use std::sync::{Arc, OnceLock};

use regex::Regex;
use tracing::{error, info};
use url::Url;

use crate::app::{DigestError, Result};
use crate::config::Model;
use crate::content::{clean_url, ContentFetcher, FetchedContent};
use crate::host::{EditorSurface, Notifier};
use crate::summarizer::SummaryComposer;

const UNUSABLE_MESSAGE: &str = "The fetched content did not look like a readable article.";

fn url_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#"https?://[^\s<>"']+"#).expect("valid URL regex"))
}

/// First `http(s)://` URL in `text`, as written (not yet cleaned).
pub fn find_url(text: &str) -> Option<&str> {
    url_pattern().find(text).map(|m| m.as_str())
}

/// What an inline run put into the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineOutcome {
    Summarized { url: String },
    Unusable { url: String },
    Failed,
}

pub struct InlineSummarizer {
    content: ContentFetcher,
    composer: SummaryComposer,
    notifier: Arc<dyn Notifier>,
}

impl InlineSummarizer {
    pub fn new(content: ContentFetcher, composer: SummaryComposer, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            content,
            composer,
            notifier,
        }
    }

    /// Run the flow against `editor`. Never fails: errors become a notice.
    pub async fn run(&self, editor: &mut dyn EditorSurface, model: Model) -> InlineOutcome {
        match self.try_run(editor, model).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("Inline summary failed: {}", e);
                self.notifier
                    .notify(&format!("Failed to summarize URL: {}", e));
                InlineOutcome::Failed
            }
        }
    }

    async fn try_run(&self, editor: &mut dyn EditorSurface, model: Model) -> Result<InlineOutcome> {
        let selection = editor.selection();
        let url = find_url(&selection)
            .map(clean_url)
            .ok_or(DigestError::NoUrlInSelection)?
            .to_string();
        Url::parse(&url)?;
        let line = editor.cursor_line();

        info!("Summarizing {}", url);
        let content = match self.content.fetch(&url).await? {
            FetchedContent::Markdown(text) => text,
            FetchedContent::Unusable => {
                editor.insert_after_line(line, &error_callout(&url));
                self.notifier
                    .notify(&format!("Could not extract readable content from {}", url));
                return Ok(InlineOutcome::Unusable { url });
            }
        };

        let summary = self.composer.summarize_document(&content, model).await?;
        editor.insert_after_line(line, &summary_callout(&url, &summary));

        Ok(InlineOutcome::Summarized { url })
    }
}

/// Quote every line of `summary` under a summary callout header.
pub fn summary_callout(url: &str, summary: &str) -> String {
    let mut block = format!("> [!summary] Summary of {}\n", url);
    for line in summary.lines() {
        if line.is_empty() {
            block.push_str(">\n");
        } else {
            block.push_str("> ");
            block.push_str(line);
            block.push('\n');
        }
    }
    block
}

pub fn error_callout(url: &str) -> String {
    format!("> [!error] Could not summarize {}\n> {}\n", url, UNUSABLE_MESSAGE)
}
