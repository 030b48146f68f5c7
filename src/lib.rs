//! # news-digest
//!
//! Turns a list of categorized RSS/Atom feeds into a dated Markdown news
//! digest, one LLM-written section per category, and summarizes single web
//! pages inline into Markdown notes.
//!
//! ## Architecture
//!
//! ```text
//! feeds config → FeedFetcher → SummaryComposer → DigestWriter      (pipeline)
//! selection URL → ContentFetcher → SummaryComposer → EditorSurface (inline)
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! # Write today's digest under <document_root>/News Summaries/
//! news-digest generate
//!
//! # Summarize the link on line 12 of a note
//! news-digest summarize-url --file notes/reading.md --line 12
//!
//! # Change a setting
//! news-digest settings set max_items_per_feed 3
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires the HTTP fetcher,
/// completion client and notifier together from a [`Config`](config::Config).
pub mod app;

/// Command-line interface using clap.
///
/// - `generate [--date] [--root]` - Write the daily digest
/// - `summarize-url --file --line` - Inline summary into a note
/// - `commands` - List registered commands
/// - `settings show|set` - Inspect or edit settings
pub mod cli;

/// User-invocable commands and the [`CommandRegistry`](commands::CommandRegistry)
/// a host exposes them through.
pub mod commands;

/// Configuration loaded from `~/.config/news-digest/config.toml`,
/// including the line-based feed list parser.
pub mod config;

/// Single-URL content retrieval through ordered transports.
pub mod content;

/// The dated, append-only Markdown digest.
pub mod digest;

/// Core domain models.
///
/// - [`FeedItemSummary`](domain::FeedItemSummary): title, link, snippet of one feed item
/// - [`CategoryBlock`](domain::CategoryBlock): a category's items and generated summary
pub mod domain;

/// HTTP fetching and per-feed item retrieval.
pub mod fetcher;

/// Host capabilities: notices and the editable document.
pub mod host;

/// Inline URL summarization.
pub mod inline;

/// Feed parsing into [`FeedItemSummary`](domain::FeedItemSummary) values.
///
/// Handles RSS 0.9x/1.0/2.0, Atom 0.3/1.0, and JSON Feed 1.0 via feed-rs.
pub mod normalizer;

/// Sequential, failure-isolating digest generation.
pub mod pipeline;

/// Prompt building and the completion service client.
pub mod summarizer;
