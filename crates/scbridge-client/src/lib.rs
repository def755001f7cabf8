//! HTTP clients for the bridge.
//!
//! [`Fetcher`] downloads a private Slack file with a bearer token and
//! [`Publisher`] pushes bytes to Cloudinary with a signed upload. Both are
//! traits so the pipeline can be exercised against in-process stubs; the
//! `Slack*` and `Cloudinary*` types are the real implementations.

pub mod fetcher;
pub mod http;
pub mod publisher;
pub mod signature;

pub use fetcher::{Fetcher, SlackFetcher};
pub use http::build_http_client;
pub use publisher::{CloudinaryPublisher, Publisher};
