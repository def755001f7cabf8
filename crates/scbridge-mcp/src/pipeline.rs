//! Download → upload pipeline behind the `upload_slack_image` tool
//!
//! Each invocation reads credentials at call time, runs the credential gate,
//! fetches the Slack file and publishes it to Cloudinary, in that order. The
//! pipeline holds no mutable state, so concurrent invocations are independent.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use anyhow::Result;
use futures::FutureExt;
use scbridge_client::{build_http_client, CloudinaryPublisher, Fetcher, Publisher, SlackFetcher};
use scbridge_core::error::LogLevel;
use scbridge_core::{BridgeError, BridgeResult, BridgeSettings, Credentials, EnvSource, ProcessEnv};

#[derive(Clone)]
pub struct BridgePipeline {
    env: Arc<dyn EnvSource>,
    fetcher: Arc<dyn Fetcher>,
    publisher: Arc<dyn Publisher>,
}

impl BridgePipeline {
    pub fn new(
        env: Arc<dyn EnvSource>,
        fetcher: Arc<dyn Fetcher>,
        publisher: Arc<dyn Publisher>,
    ) -> Self {
        Self {
            env,
            fetcher,
            publisher,
        }
    }

    /// Production pipeline: process environment, Slack fetcher, Cloudinary publisher.
    pub fn from_settings(settings: &BridgeSettings) -> Result<Self> {
        let client = build_http_client(settings.http_timeout)?;

        Ok(Self::new(
            Arc::new(ProcessEnv),
            Arc::new(SlackFetcher::new(client.clone())),
            Arc::new(CloudinaryPublisher::new(client, settings)),
        ))
    }

    /// Run the pipeline and return the public URL or a typed error.
    ///
    /// A panic inside either stage is reported as `BridgeError::Unexpected`
    /// instead of unwinding into the host.
    #[tracing::instrument(name = "upload_slack_image", skip_all)]
    pub async fn run(&self, resource_url: &str) -> BridgeResult<String> {
        let outcome = AssertUnwindSafe(self.run_stages(resource_url))
            .catch_unwind()
            .await
            .unwrap_or_else(|panic| Err(BridgeError::Unexpected(panic_message(panic))));

        match &outcome {
            Ok(url) => tracing::info!(public_url = %url, "Slack image published"),
            Err(e) => match e.log_level() {
                LogLevel::Warn => {
                    tracing::warn!(error_code = e.error_code(), error = %e, "Upload rejected")
                }
                LogLevel::Error => {
                    tracing::error!(error_code = e.error_code(), error = %e, "Upload failed")
                }
            },
        }

        outcome
    }

    /// Tool-boundary form of [`run`](Self::run): always a string, either the
    /// public URL or a category-prefixed error message.
    pub async fn upload_slack_image(&self, resource_url: &str) -> String {
        match self.run(resource_url).await {
            Ok(url) => url,
            Err(e) => e.tool_message(),
        }
    }

    async fn run_stages(&self, resource_url: &str) -> BridgeResult<String> {
        let credentials = Credentials::from_source(self.env.as_ref())?;

        let payload = self
            .fetcher
            .fetch(resource_url, &credentials.bot_token)
            .await?;
        tracing::debug!(bytes = payload.len(), "Fetched Slack file");

        self.publisher
            .publish(payload, &credentials.cloudinary)
            .await
    }
}

fn panic_message(panic: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        format!("pipeline panicked: {}", s)
    } else if let Some(s) = panic.downcast_ref::<String>() {
        format!("pipeline panicked: {}", s)
    } else {
        "pipeline panicked".to_string()
    }
}
