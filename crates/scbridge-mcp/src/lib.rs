//! Scbridge MCP Server
//!
//! Model Context Protocol server that exposes the Slack to Cloudinary bridge
//! as a single tool, `upload_slack_image`, for AI assistants (Claude Desktop,
//! Cursor, etc.)

pub mod pipeline;
pub mod server;
pub mod telemetry;
pub mod tools;

pub use pipeline::BridgePipeline;
pub use server::BridgeService;
