pub mod commands;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "news-digest")]
#[command(about = "Summarize RSS feeds into a daily Markdown digest", long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.config/news-digest/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate Today's News Summary
    Generate {
        /// Digest date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Document root the "News Summaries" folder lives in
        #[arg(short, long)]
        root: Option<PathBuf>,
    },
    /// Summarize the URL on a note line and insert the summary below it
    SummarizeUrl {
        /// Markdown note to edit in place
        #[arg(short, long)]
        file: PathBuf,

        /// One-based line holding the cursor
        #[arg(short, long)]
        line: usize,

        /// Selected text (defaults to the whole line)
        #[arg(short, long)]
        selection: Option<String>,
    },
    /// List the registered commands
    Commands {
        /// Only show commands available for this selection in the context menu
        #[arg(long)]
        selection: Option<String>,
    },
    /// Show or change settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Print the current settings
    Show,
    /// Change one setting and save it
    Set {
        /// Setting name, e.g. max_items_per_feed or content.proxy_endpoint
        key: String,
        value: String,
    },
}
