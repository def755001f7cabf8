//! Scbridge Core
//!
//! Shared types for the Slack to Cloudinary bridge: the error taxonomy every
//! stage reports through, the credential gate that runs before any network
//! call, and the startup settings that shape the HTTP clients.
//!
//! Nothing here touches the network. The client crate performs the two HTTP
//! calls and the MCP crate wires them into a tool.

pub mod config;
pub mod constants;
pub mod env;
pub mod error;

pub use config::{check_required, BotToken, BridgeSettings, CloudinaryCredentials, Credentials};
pub use env::{EnvSource, MapEnv, ProcessEnv};
pub use error::{BridgeError, BridgeResult, Stage};
