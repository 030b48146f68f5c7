use feed_rs::parser;
use html_escape::decode_html_entities;

use crate::app::{DigestError, Result};
use crate::domain::FeedItemSummary;

const UNTITLED: &str = "(Untitled)";

#[derive(Clone)]
pub struct Normalizer;

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    /// Parse RSS/Atom/JSON Feed bytes into item summaries, in feed order.
    pub fn normalize(&self, body: &[u8]) -> Result<Vec<FeedItemSummary>> {
        let feed = parser::parse(body).map_err(|e| DigestError::FeedParse(e.to_string()))?;

        let items = feed
            .entries
            .into_iter()
            .map(|entry| {
                let title = entry
                    .title
                    .map(|t| decode_html_entities(&t.content).trim().to_string())
                    .filter(|t| !t.is_empty())
                    .unwrap_or_else(|| UNTITLED.to_string());
                let link = entry
                    .links
                    .first()
                    .map(|l| l.href.clone())
                    .unwrap_or_default();

                let content = entry.content.and_then(|c| c.body);
                let content_snippet = content.as_deref().map(strip_markup);
                // RSS <description> lands here and often carries HTML
                let summary = entry.summary.map(|s| strip_markup(&s.content));
                let raw_content = content.map(|b| decode_html_entities(&b).to_string());

                let snippet = FeedItemSummary::choose_snippet(
                    content_snippet.as_deref(),
                    summary.as_deref(),
                    raw_content.as_deref(),
                );

                FeedItemSummary {
                    title,
                    link,
                    snippet,
                }
            })
            .collect();

        Ok(items)
    }
}

/// Plain-text rendering of an HTML fragment: tags dropped, entities decoded,
/// whitespace collapsed.
pub fn strip_markup(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;

    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                text.push(' ');
            }
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }

    decode_html_entities(&text)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const RSS_SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:content="http://purl.org/rss/1.0/modules/content/">
  <channel>
    <title>Test Feed</title>
    <description>A test feed</description>
    <item>
      <title>Test Item 1</title>
      <link>https://example.com/item1</link>
      <guid>item-1</guid>
      <description>This is item 1</description>
      <content:encoded><![CDATA[<p>Full <b>body</b> of item 1</p>]]></content:encoded>
    </item>
    <item>
      <title>Test Item 2 &amp; more</title>
      <link>https://example.com/item2</link>
      <guid>item-2</guid>
      <description>This is item 2</description>
    </item>
    <item>
      <link>https://example.com/item3</link>
      <guid>item-3</guid>
    </item>
  </channel>
</rss>"#;

    const ATOM_SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Atom Test Feed</title>
  <entry>
    <title>Atom Entry 1</title>
    <link href="https://example.com/atom1"/>
    <id>atom-entry-1</id>
    <updated>2024-01-01T00:00:00Z</updated>
    <summary>This is Atom entry 1</summary>
  </entry>
</feed>"#;

    #[test]
    fn test_parse_rss() {
        let items = Normalizer::new().normalize(RSS_SAMPLE.as_bytes()).unwrap();

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].title, "Test Item 1");
        assert_eq!(items[0].link, "https://example.com/item1");
        assert_eq!(items[1].title, "Test Item 2 & more");
    }

    #[test]
    fn test_snippet_prefers_content() {
        let items = Normalizer::new().normalize(RSS_SAMPLE.as_bytes()).unwrap();

        assert_eq!(items[0].snippet, "Full body of item 1");
        assert_eq!(items[1].snippet, "This is item 2");
    }

    #[test]
    fn test_missing_fields_defaulted() {
        let items = Normalizer::new().normalize(RSS_SAMPLE.as_bytes()).unwrap();

        assert_eq!(items[2].title, UNTITLED);
        assert_eq!(items[2].snippet, "");
    }

    #[test]
    fn test_parse_atom() {
        let items = Normalizer::new().normalize(ATOM_SAMPLE.as_bytes()).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Atom Entry 1");
        assert_eq!(items[0].link, "https://example.com/atom1");
        assert_eq!(items[0].snippet, "This is Atom entry 1");
    }

    #[test]
    fn test_invalid_feed() {
        let result = Normalizer::new().normalize(b"definitely not xml");
        assert!(matches!(result, Err(DigestError::FeedParse(_))));
    }

    #[test]
    fn test_html_description_stripped() {
        let rss = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>HN</title>
    <item>
      <title>Show HN</title>
      <link>https://example.com/show</link>
      <description>&lt;p&gt;Article URL: &lt;a href="https://x"&gt;https://x&lt;/a&gt;&lt;/p&gt;</description>
    </item>
  </channel>
</rss>"#;

        let items = Normalizer::new().normalize(rss.as_bytes()).unwrap();

        assert!(!items[0].snippet.contains('<'));
        assert_eq!(items[0].snippet, "Article URL: https://x");
    }

    #[test]
    fn test_strip_markup() {
        assert_eq!(
            strip_markup("<p>Hello&nbsp;<a href=\"x\">world</a></p>\n<p>again</p>"),
            "Hello world again"
        );
    }
}
