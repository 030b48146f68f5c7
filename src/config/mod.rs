//! Configuration management for news-digest.
//!
//! Configuration is read from `~/.config/news-digest/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.
//! Edits go through [`Settings`], which persists every change through an
//! injected callback.

pub mod feeds;
pub mod model;

pub use feeds::{FeedCategories, UNCATEGORIZED};
pub use model::Model;

use crate::content::ContentConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_MAX_ITEMS: NonZeroUsize = match NonZeroUsize::new(5) {
    Some(n) => n,
    None => unreachable!(),
};

pub const DEFAULT_API_BASE_URL: &str = "https://api.openai.com/v1/chat/completions";

pub const DEFAULT_PROMPT_TEMPLATE: &str = "Summarize the news items above as a short Markdown digest. \
Group related stories, keep each point to one or two sentences, and link to the original articles.";

const DEFAULT_FEEDS: &str = "# Tech\nhttps://hnrss.org/frontpage\nhttps://blog.rust-lang.org/feed.xml\n\n# World\nhttps://feeds.bbci.co.uk/news/world/rss.xml\n";

/// Main configuration struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Feed configuration, one entry per line; `#` lines are category headers.
    pub feeds: String,
    pub max_items_per_feed: NonZeroUsize,
    pub model: Model,
    pub prompt_template: String,
    /// Empty means "use `OPENAI_API_KEY`".
    pub api_key: String,
    pub api_base_url: String,
    /// Root the `News Summaries` folder is created under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_root: Option<PathBuf>,
    pub request_timeout_secs: u64,
    pub content: ContentConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feeds: DEFAULT_FEEDS.to_string(),
            max_items_per_feed: DEFAULT_MAX_ITEMS,
            model: Model::default(),
            prompt_template: DEFAULT_PROMPT_TEMPLATE.to_string(),
            api_key: String::new(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            document_root: None,
            request_timeout_secs: 30,
            content: ContentConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// Missing fields in the config file will use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            Self::create_default_config(config_path)?;
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| ConfigError::Io {
            path: config_path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: config_path.to_path_buf(),
            source: e,
        })?;

        Ok(config)
    }

    /// Write the configuration back as TOML. Comments in the file are not kept.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        write_file(path, &content)
    }

    /// Get the default config file path: `~/.config/news-digest/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("news-digest").join("config.toml"))
    }

    pub fn feed_categories(&self) -> FeedCategories {
        feeds::parse_text(&self.feeds)
    }

    /// Configured key, falling back to the `OPENAI_API_KEY` environment variable.
    pub fn resolve_api_key(&self) -> Option<String> {
        if !self.api_key.trim().is_empty() {
            return Some(self.api_key.trim().to_string());
        }
        std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
    }

    pub fn resolve_document_root(&self) -> PathBuf {
        self.document_root
            .clone()
            .or_else(dirs::document_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Apply a single `key = value` edit coming from the settings surface.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        match key {
            "feeds" => self.feeds = value.replace("\\n", "\n"),
            "max_items_per_feed" => {
                self.max_items_per_feed = value
                    .trim()
                    .parse::<NonZeroUsize>()
                    .map_err(|e| invalid(format!("expected a positive integer ({})", e)))?;
            }
            "model" => self.model = value.parse().map_err(invalid)?,
            "prompt_template" => self.prompt_template = value.to_string(),
            "api_key" => self.api_key = value.trim().to_string(),
            "api_base_url" => self.api_base_url = value.trim().to_string(),
            "document_root" => {
                self.document_root = if value.trim().is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value.trim()))
                };
            }
            "request_timeout_secs" => {
                self.request_timeout_secs = value
                    .trim()
                    .parse()
                    .map_err(|e| invalid(format!("expected seconds ({})", e)))?;
            }
            "content.proxy_endpoint" => self.content.proxy_endpoint = value.trim().to_string(),
            "content.fallback_enabled" => {
                self.content.fallback_enabled = value
                    .trim()
                    .parse()
                    .map_err(|e| invalid(format!("expected true or false ({})", e)))?;
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }

        Ok(())
    }

    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        write_file(path, &Self::default_config_content())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        r##"# news-digest configuration

# One entry per line. Lines starting with "#" inside this block are category
# headers; every following line is a feed URL of that category. URLs listed
# before the first header go to "Uncategorized".
feeds = """
# Tech
https://hnrss.org/frontpage
https://blog.rust-lang.org/feed.xml

# World
https://feeds.bbci.co.uk/news/world/rss.xml
"""

# Items taken from the top of each feed
max_items_per_feed = 5

# One of: gpt-4o-mini, gpt-4o, gpt-4-turbo, gpt-3.5-turbo
model = "gpt-4o-mini"

# Instructions appended to every category prompt
prompt_template = "Summarize the news items above as a short Markdown digest. Group related stories, keep each point to one or two sentences, and link to the original articles."

# Leave empty to use the OPENAI_API_KEY environment variable
api_key = ""
api_base_url = "https://api.openai.com/v1/chat/completions"

# Digests are written to <document_root>/News Summaries/
# document_root = "/home/me/Notes"

request_timeout_secs = 30

[content]
# Content-extraction proxy used by summarize-url
proxy_endpoint = "https://r.jina.ai/"

# Retry a failed proxy request once through a command-line fetcher
fallback_enabled = true
fallback_command = ["curl", "-sL"]

# Fetched text must contain a line starting with one of these
required_labels = ["Title:", "Markdown Content:", "Published Time:"]
"##
        .to_string()
    }
}

fn write_file(path: &Path, content: &str) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    file.write_all(content.as_bytes())
        .map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Callback invoked with the new configuration after every edit.
pub type PersistFn = Box<dyn Fn(&Config) -> Result<(), ConfigError> + Send + Sync>;

/// Process-wide settings: loaded once, mutated only through [`Settings::update`].
pub struct Settings {
    config: Config,
    persist: PersistFn,
}

impl Settings {
    pub fn new(config: Config, persist: PersistFn) -> Self {
        Self { config, persist }
    }

    /// Settings that write back to `path` on every change.
    pub fn with_file(config: Config, path: PathBuf) -> Self {
        Self::new(config, Box::new(move |c: &Config| c.save(&path)))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Mutate the configuration and persist it. On persistence failure the
    /// in-memory configuration is left unchanged.
    pub fn update<F>(&mut self, f: F) -> Result<(), ConfigError>
    where
        F: FnOnce(&mut Config) -> Result<(), ConfigError>,
    {
        let mut next = self.config.clone();
        f(&mut next)?;
        (self.persist)(&next)?;
        self.config = next;
        Ok(())
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        self.update(|c| c.set(key, value))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Unknown setting: {0}")]
    UnknownKey(String),

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}
