use serde::{Deserialize, Serialize};

/// Configuration for single-URL content retrieval
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContentConfig {
    /// Content-extraction proxy; the target URL is appended verbatim
    pub proxy_endpoint: String,

    /// Whether to try the command-line fallback when the proxy request fails (default: true)
    pub fallback_enabled: bool,

    /// Program and leading arguments for the fallback; the request URL is appended
    pub fallback_command: Vec<String>,

    /// Line prefixes, at least one of which must appear in usable content
    pub required_labels: Vec<String>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            proxy_endpoint: "https://r.jina.ai/".to_string(),
            fallback_enabled: true,
            fallback_command: vec!["curl".to_string(), "-sL".to_string()],
            required_labels: vec![
                "Title:".to_string(),
                "Markdown Content:".to_string(),
                "Published Time:".to_string(),
            ],
        }
    }
}

impl ContentConfig {
    /// Build the proxy request URL for a cleaned target URL
    pub fn request_url(&self, target: &str) -> String {
        format!("{}{}", self.proxy_endpoint, target)
    }

    /// Check the body for at least one expected section label
    pub fn looks_usable(&self, body: &str) -> bool {
        body.lines().any(|line| {
            let line = line.trim_start();
            self.required_labels
                .iter()
                .any(|label| line.starts_with(label.as_str()))
        })
    }
}
