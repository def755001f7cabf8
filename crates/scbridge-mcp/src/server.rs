//! MCP server using rmcp SDK
//!
//! Exposes the bridge as a single MCP tool over stdio.

use crate::pipeline::BridgePipeline;
use crate::tools::*;
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::tool::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ServerHandler};
use std::future::Future;
use std::sync::Arc;

fn text_content(s: impl Into<String>) -> Content {
    Content {
        raw: RawContent::Text(RawTextContent { text: s.into() }),
        annotations: None,
    }
}

#[derive(Clone)]
pub struct BridgeService {
    pipeline: Arc<BridgePipeline>,
    tool_router: ToolRouter<BridgeService>,
}

#[tool_router]
impl BridgeService {
    pub fn new(pipeline: BridgePipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            tool_router: Self::tool_router(),
        }
    }

    /// Run one upload and wrap the outcome as a tool result.
    ///
    /// Failures are tool results flagged `isError`, never protocol errors,
    /// so the host always receives the message text.
    pub async fn handle_upload(&self, slack_url: &str) -> CallToolResult {
        match self.pipeline.run(slack_url).await {
            Ok(url) => CallToolResult::success(vec![text_content(url)]),
            Err(e) => CallToolResult::error(vec![text_content(e.tool_message())]),
        }
    }

    #[tool(
        description = "Download an image from a private Slack URL and upload it to Cloudinary. \
                       Returns the public Cloudinary URL, or an error message."
    )]
    async fn upload_slack_image(
        &self,
        Parameters(req): Parameters<UploadSlackImageRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(self.handle_upload(&req.slack_url).await)
    }
}

#[tool_handler]
impl ServerHandler for BridgeService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "Slack to Cloudinary Uploader".into(),
                version: env!("CARGO_PKG_VERSION").into(),
            },
            instructions: Some(
                "Slack to Cloudinary bridge: upload_slack_image re-hosts a private Slack image on \
                 Cloudinary. Set BOT_TOKEN, CLOUDINARY_API_KEY, CLOUDINARY_API_SECRET and \
                 CLOUDINARY_CLOUD_NAME."
                    .to_string(),
            ),
        }
    }
}
