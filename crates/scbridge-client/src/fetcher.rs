//! Download of private Slack files

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Url};
use scbridge_core::constants::BOT_TOKEN;
use scbridge_core::{BotToken, BridgeError, BridgeResult, Stage};

use crate::http::transport_error;

/// Downloads the raw bytes behind a private resource URL.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, resource_url: &str, bot_token: &BotToken) -> BridgeResult<Bytes>;
}

/// Fetcher for `url_private` / `url_private_download` links on Slack.
#[derive(Debug, Clone)]
pub struct SlackFetcher {
    client: Client,
}

impl SlackFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for SlackFetcher {
    async fn fetch(&self, resource_url: &str, bot_token: &BotToken) -> BridgeResult<Bytes> {
        if bot_token.expose().is_empty() {
            return Err(BridgeError::Configuration(format!(
                "{} environment variable not set.",
                BOT_TOKEN
            )));
        }

        let url = Url::parse(resource_url.trim()).map_err(|e| {
            BridgeError::InvalidInput(format!("'{}' is not a valid URL: {}", resource_url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(BridgeError::InvalidInput(format!(
                "unsupported URL scheme '{}'",
                url.scheme()
            )));
        }

        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, format!("Bearer {}", bot_token.expose()))
            .send()
            .await
            .map_err(|e| transport_error(Stage::Download, e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Slack download rejected");
            return Err(BridgeError::Http {
                stage: Stage::Download,
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(Stage::Download, e))?;

        tracing::debug!(bytes = body.len(), "Downloaded Slack file");
        Ok(body)
    }
}
