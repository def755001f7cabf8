//! MCP tool request types with JSON Schema for AI parameter generation

use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UploadSlackImageRequest {
    #[schemars(description = "Private Slack file URL (url_private or url_private_download)")]
    pub slack_url: String,
}
