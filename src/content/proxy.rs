use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::app::Result;
use crate::content::Transport;
use crate::fetcher::http_fetcher::USER_AGENT;

/// HTTP GET against the content-extraction proxy
pub struct ProxyTransport {
    client: Client,
}

impl ProxyTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .brotli(true)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ProxyTransport {
    fn name(&self) -> &str {
        "proxy"
    }

    async fn get(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        response.error_for_status_ref()?;
        Ok(response.text().await?)
    }
}
