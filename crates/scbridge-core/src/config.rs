//! Configuration module
//!
//! Two kinds of configuration live here:
//!
//! - credentials (`BOT_TOKEN`, `CLOUDINARY_*`), read from an [`EnvSource`] on
//!   every invocation and validated by the credential gate before any
//!   network call;
//! - startup settings (timeout, upload prefix, folder) that shape the HTTP
//!   clients once for the life of the process.

use std::fmt;
use std::time::Duration;

use crate::constants::{
    BOT_TOKEN, BRIDGE_HTTP_TIMEOUT_SECS, CLOUDINARY_API_KEY, CLOUDINARY_API_SECRET,
    CLOUDINARY_CLOUD_NAME, CLOUDINARY_UPLOAD_FOLDER, CLOUDINARY_UPLOAD_PREFIX,
    DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_UPLOAD_PREFIX, REQUIRED_CREDENTIALS,
};
use crate::env::EnvSource;
use crate::error::{BridgeError, BridgeResult};

/// Check every name against `source` and report all that are unset or empty.
///
/// Names are reported in the order given. Has no side effects.
pub fn check_required(source: &dyn EnvSource, names: &[&str]) -> BridgeResult<()> {
    let missing: Vec<String> = names
        .iter()
        .filter(|name| lookup(source, name).is_none())
        .map(|name| name.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(BridgeError::MissingCredentials(missing))
    }
}

fn lookup(source: &dyn EnvSource, name: &str) -> Option<String> {
    source.get(name).filter(|value| !value.is_empty())
}

/// Slack bot token sent as a bearer credential.
#[derive(Clone, PartialEq, Eq)]
pub struct BotToken(String);

impl BotToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BotToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BotToken(<redacted>)")
    }
}

/// Cloudinary account credentials, scoped to a single upload call.
#[derive(Clone, PartialEq, Eq)]
pub struct CloudinaryCredentials {
    pub api_key: String,
    pub api_secret: String,
    pub cloud_name: String,
}

impl CloudinaryCredentials {
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        cloud_name: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            cloud_name: cloud_name.into(),
        }
    }

    /// Names of the credentials that are empty, in reporting order.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.api_key.is_empty() {
            missing.push(CLOUDINARY_API_KEY);
        }
        if self.api_secret.is_empty() {
            missing.push(CLOUDINARY_API_SECRET);
        }
        if self.cloud_name.is_empty() {
            missing.push(CLOUDINARY_CLOUD_NAME);
        }
        missing
    }
}

impl fmt::Debug for CloudinaryCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloudinaryCredentials")
            .field("api_key", &"<redacted>")
            .field("api_secret", &"<redacted>")
            .field("cloud_name", &self.cloud_name)
            .finish()
    }
}

/// Every credential one pipeline invocation needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub bot_token: BotToken,
    pub cloudinary: CloudinaryCredentials,
}

impl Credentials {
    /// Run the credential gate over all four names and collect the values.
    pub fn from_source(source: &dyn EnvSource) -> BridgeResult<Self> {
        check_required(source, &REQUIRED_CREDENTIALS)?;

        let read = |name: &str| lookup(source, name).unwrap_or_default();
        Ok(Self {
            bot_token: BotToken::new(read(BOT_TOKEN)),
            cloudinary: CloudinaryCredentials::new(
                read(CLOUDINARY_API_KEY),
                read(CLOUDINARY_API_SECRET),
                read(CLOUDINARY_CLOUD_NAME),
            ),
        })
    }
}

/// Process-wide settings read once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeSettings {
    pub http_timeout: Duration,
    pub upload_prefix: String,
    pub upload_folder: Option<String>,
}

impl Default for BridgeSettings {
    fn default() -> Self {
        Self {
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            upload_prefix: DEFAULT_UPLOAD_PREFIX.to_string(),
            upload_folder: None,
        }
    }
}

impl BridgeSettings {
    /// Load settings from the process environment.
    ///
    /// The binary loads `.env` before calling this.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        Self::from_source(&crate::env::ProcessEnv)
    }

    pub fn from_source(source: &dyn EnvSource) -> Result<Self, anyhow::Error> {
        let timeout_secs = match lookup(source, BRIDGE_HTTP_TIMEOUT_SECS) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                anyhow::anyhow!("{} must be a positive number of seconds", BRIDGE_HTTP_TIMEOUT_SECS)
            })?,
            None => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        let upload_prefix = lookup(source, CLOUDINARY_UPLOAD_PREFIX)
            .map(|p| p.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_UPLOAD_PREFIX.to_string());

        let upload_folder = lookup(source, CLOUDINARY_UPLOAD_FOLDER)
            .map(|f| f.trim().trim_matches('/').to_string())
            .filter(|f| !f.is_empty());

        let settings = Self {
            http_timeout: Duration::from_secs(timeout_secs),
            upload_prefix,
            upload_folder,
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.http_timeout.is_zero() {
            return Err(anyhow::anyhow!(
                "{} must be greater than zero",
                BRIDGE_HTTP_TIMEOUT_SECS
            ));
        }

        if !self.upload_prefix.starts_with("https://") && !self.upload_prefix.starts_with("http://")
        {
            return Err(anyhow::anyhow!(
                "{} must be an http(s) URL",
                CLOUDINARY_UPLOAD_PREFIX
            ));
        }

        if !self.upload_prefix.starts_with("https://") {
            tracing::warn!(
                upload_prefix = %self.upload_prefix,
                "Cloudinary upload prefix does not use TLS"
            );
        }

        Ok(())
    }
}
