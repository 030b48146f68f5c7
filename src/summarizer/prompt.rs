//! Prompt construction for the completion service.

use crate::domain::FeedItemSummary;

/// Preamble for single-document summaries.
pub const DOCUMENT_PREAMBLE: &str = "Summarize the following web page content. \
Respond in Markdown using headings and bullet points to capture the key ideas.";

/// `Category: <name>`, the item bullets, then the configured instructions.
pub fn category_prompt(category: &str, bullets: &[String], instructions: &str) -> String {
    format!(
        "Category: {}\n\n{}\n\n{}",
        category,
        bullets.join("\n"),
        instructions
    )
}

pub fn bullets(items: &[FeedItemSummary]) -> Vec<String> {
    items.iter().map(FeedItemSummary::bullet_line).collect()
}

pub fn document_prompt(content: &str) -> String {
    format!("{}\n\n{}", DOCUMENT_PREAMBLE, content)
}
