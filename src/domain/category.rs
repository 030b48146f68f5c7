use crate::app::DigestError;
use crate::domain::FeedItemSummary;

/// Body written for a category whose fetch or summarization failed.
pub const ERROR_PLACEHOLDER: &str = "*Error generating summary for this category.*";

/// One category's worth of work during a pipeline run.
#[derive(Debug)]
pub struct CategoryBlock {
    pub category: String,
    pub items: Vec<FeedItemSummary>,
    pub generated: Result<String, DigestError>,
}

impl CategoryBlock {
    pub fn is_failed(&self) -> bool {
        self.generated.is_err()
    }

    /// Markdown to write into the digest for this category
    pub fn section_body(&self) -> &str {
        match &self.generated {
            Ok(markdown) => markdown.as_str(),
            Err(_) => ERROR_PLACEHOLDER,
        }
    }
}
