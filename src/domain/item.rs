#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItemSummary {
    pub title: String,
    pub link: String,
    pub snippet: String,
}

impl FeedItemSummary {
    pub fn new(title: impl Into<String>, link: impl Into<String>, snippet: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            snippet: snippet.into(),
        }
    }

    /// Pick the snippet by priority: content snippet, summary, raw content.
    pub fn choose_snippet(
        content_snippet: Option<&str>,
        summary: Option<&str>,
        content: Option<&str>,
    ) -> String {
        [content_snippet, summary, content]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|s| !s.is_empty())
            .unwrap_or("")
            .to_string()
    }

    /// Render as a prompt bullet: `- **[title](link)**: snippet`
    pub fn bullet_line(&self) -> String {
        format!("- **[{}]({})**: {}", self.title, self.link, self.snippet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_line() {
        let item = FeedItemSummary::new("Rust 2.0", "https://example.com/r", "Big news");
        assert_eq!(item.bullet_line(), "- **[Rust 2.0](https://example.com/r)**: Big news");
    }

    #[test]
    fn test_snippet_prefers_content_snippet() {
        let snippet = FeedItemSummary::choose_snippet(Some("snip"), Some("sum"), Some("<p>raw</p>"));
        assert_eq!(snippet, "snip");
    }

    #[test]
    fn test_snippet_falls_back_to_summary() {
        let snippet = FeedItemSummary::choose_snippet(None, Some("sum"), Some("<p>raw</p>"));
        assert_eq!(snippet, "sum");
    }

    #[test]
    fn test_snippet_skips_blank_fields() {
        let snippet = FeedItemSummary::choose_snippet(Some("  "), None, Some("<p>raw</p>"));
        assert_eq!(snippet, "<p>raw</p>");
    }

    #[test]
    fn test_snippet_empty_when_nothing() {
        assert_eq!(FeedItemSummary::choose_snippet(None, None, None), "");
    }
}
