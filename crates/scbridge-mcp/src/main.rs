//! Scbridge MCP Server
//!
//! Model Context Protocol server for the Slack to Cloudinary bridge
//! Run with: BOT_TOKEN=xxx CLOUDINARY_API_KEY=xxx CLOUDINARY_API_SECRET=xxx CLOUDINARY_CLOUD_NAME=xxx scbridge-mcp

use anyhow::Context;
use rmcp::service::ServiceExt;
use rmcp::transport::io::stdio;
use scbridge_core::constants::REQUIRED_CREDENTIALS;
use scbridge_core::{check_required, BridgeSettings, ProcessEnv};
use scbridge_mcp::telemetry::init_telemetry;
use scbridge_mcp::{BridgePipeline, BridgeService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_telemetry()?;

    let settings = BridgeSettings::from_env().context("Invalid bridge settings")?;

    // Credentials are re-read on every call; a gap here is only worth a warning.
    if let Err(e) = check_required(&ProcessEnv, &REQUIRED_CREDENTIALS) {
        tracing::warn!(error = %e, "Tool calls will fail until credentials are set");
    }

    let pipeline = BridgePipeline::from_settings(&settings)
        .context("Failed to build Slack and Cloudinary clients")?;

    tracing::info!(
        timeout_secs = settings.http_timeout.as_secs(),
        upload_prefix = %settings.upload_prefix,
        "Running Slack-Cloudinary bridge over stdio"
    );

    let service = BridgeService::new(pipeline);
    let running = service.serve(stdio()).await.context("MCP transport failed")?;
    running.waiting().await.context("MCP server error")?;

    Ok(())
}
