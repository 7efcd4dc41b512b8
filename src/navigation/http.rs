use crate::navigation::traits::{Landing, Navigator};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

/// Navigator that follows targets over HTTP against a running front end
pub struct HttpNavigator {
    client: Client,
    base_url: Url,
}

impl HttpNavigator {
    /// Create a navigator for the front end at `base_url`
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid server URL: {}", base_url))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("booking-search/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[async_trait]
impl Navigator for HttpNavigator {
    async fn navigate(&self, target: &str) -> Result<Landing> {
        let url = self
            .base_url
            .join(target)
            .with_context(|| format!("Invalid navigation target: {}", target))?;

        debug!("Fetching URL: {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", url))?;

        if !response.status().is_success() {
            warn!("{} returned status: {}", url, response.status());
            anyhow::bail!("Failed to fetch {}: {}", url, response.status());
        }

        let body = response
            .text()
            .await
            .context("Failed to read response body")?;

        info!("Landed on {} ({} bytes)", target, body.len());

        Ok(Landing {
            target: target.to_string(),
            body: Some(body),
        })
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
