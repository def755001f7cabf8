use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use scbridge_core::{BridgeError, Stage};

/// Build the shared HTTP client. Every request made through it is bounded by `timeout`.
pub fn build_http_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("scbridge/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to create HTTP client")
}

/// Map a reqwest send/read failure to a transport error.
///
/// The request URL is dropped from the message.
pub(crate) fn transport_error(stage: Stage, err: reqwest::Error) -> BridgeError {
    let message = if err.is_timeout() {
        "request timed out".to_string()
    } else if err.is_connect() {
        format!("connection failed: {}", err.without_url())
    } else {
        err.without_url().to_string()
    };
    BridgeError::Transport { stage, message }
}
