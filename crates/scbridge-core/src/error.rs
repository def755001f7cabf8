//! Error types module
//!
//! Every stage of the bridge reports failures through `BridgeError`. The
//! variants follow the taxonomy the tool exposes to its host: configuration,
//! network/HTTP, malformed upload responses, and anything uncategorized.
//!
//! Errors stay typed all the way up to the tool boundary, where
//! `BridgeError::tool_message` renders the single string the host receives.
//! No variant ever carries a credential value.

use std::fmt;

/// Pipeline stage a network failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Download,
    Upload,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Download => f.write_str("download"),
            Stage::Upload => f.write_str("upload"),
        }
    }
}

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Expected errors caused by caller input or missing setup
    Warn,
    /// Downstream or unexpected failures
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BridgeError {
    #[error("Missing required environment variables: {}", .0.join(", "))]
    MissingCredentials(Vec<String>),

    #[error("{0}")]
    Configuration(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("{stage} failed with status {status} {reason}")]
    Http {
        stage: Stage,
        status: u16,
        reason: String,
    },

    #[error("{stage} request failed: {message}")]
    Transport { stage: Stage, message: String },

    #[error("Cloudinary upload failed or did not return a secure_url. Result: {0}")]
    UploadFailed(String),

    #[error("{0}")]
    Unexpected(String),
}

/// Result type for bridge operations
pub type BridgeResult<T> = Result<T, BridgeError>;

impl BridgeError {
    /// Machine-readable error code used in structured logs
    pub fn error_code(&self) -> &'static str {
        match self {
            BridgeError::MissingCredentials(_) => "MISSING_CREDENTIALS",
            BridgeError::Configuration(_) => "CONFIGURATION_ERROR",
            BridgeError::InvalidInput(_) => "INVALID_INPUT",
            BridgeError::Http { .. } => "HTTP_ERROR",
            BridgeError::Transport { .. } => "TRANSPORT_ERROR",
            BridgeError::UploadFailed(_) => "UPLOAD_FAILED",
            BridgeError::Unexpected(_) => "UNEXPECTED_ERROR",
        }
    }

    pub fn log_level(&self) -> LogLevel {
        match self {
            BridgeError::MissingCredentials(_)
            | BridgeError::Configuration(_)
            | BridgeError::InvalidInput(_) => LogLevel::Warn,
            _ => LogLevel::Error,
        }
    }

    /// Render the string returned to the tool host.
    ///
    /// Every message starts with one of:
    ///
    /// - `Error: Missing required environment variables:` (credential gate)
    /// - `Configuration Error:`
    /// - `Invalid Input:`
    /// - `Download Error:` (non-2xx from Slack)
    /// - `Upload Error:` (Cloudinary rejection or malformed response)
    /// - `Network Error:` (connection failure or timeout)
    /// - `An unexpected error occurred. Check logs.` (whole message)
    ///
    /// Unexpected errors get a fixed message; their detail only goes to logs.
    pub fn tool_message(&self) -> String {
        match self {
            BridgeError::MissingCredentials(_) => format!("Error: {}", self),
            BridgeError::Configuration(_) => format!("Configuration Error: {}", self),
            BridgeError::InvalidInput(_) => format!("Invalid Input: {}", self),
            BridgeError::Http {
                stage: Stage::Download,
                ..
            } => format!("Download Error: {}", self),
            BridgeError::Http {
                stage: Stage::Upload,
                ..
            }
            | BridgeError::UploadFailed(_) => format!("Upload Error: {}", self),
            BridgeError::Transport { .. } => format!("Network Error: {}", self),
            BridgeError::Unexpected(_) => "An unexpected error occurred. Check logs.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credentials_lists_every_name() {
        let err = BridgeError::MissingCredentials(vec![
            "BOT_TOKEN".to_string(),
            "CLOUDINARY_API_KEY".to_string(),
        ]);
        assert_eq!(
            err.tool_message(),
            "Error: Missing required environment variables: BOT_TOKEN, CLOUDINARY_API_KEY"
        );
        assert_eq!(err.error_code(), "MISSING_CREDENTIALS");
    }

    #[test]
    fn test_download_http_error_message() {
        let err = BridgeError::Http {
            stage: Stage::Download,
            status: 404,
            reason: "Not Found".to_string(),
        };
        assert_eq!(
            err.tool_message(),
            "Download Error: download failed with status 404 Not Found"
        );
        assert_eq!(err.log_level(), LogLevel::Error);
    }

    #[test]
    fn test_upload_failed_carries_raw_response() {
        let err = BridgeError::UploadFailed(r#"{"public_id":"abc"}"#.to_string());
        let msg = err.tool_message();
        assert!(msg.starts_with("Upload Error: "));
        assert!(msg.contains(r#"{"public_id":"abc"}"#));
    }

    #[test]
    fn test_configuration_prefix() {
        let err = BridgeError::Configuration("BOT_TOKEN environment variable not set.".into());
        assert_eq!(
            err.tool_message(),
            "Configuration Error: BOT_TOKEN environment variable not set."
        );
        assert_eq!(err.log_level(), LogLevel::Warn);
    }

    #[test]
    fn test_unexpected_hides_detail() {
        let err = BridgeError::Unexpected("task panicked: boom".into());
        assert_eq!(
            err.tool_message(),
            "An unexpected error occurred. Check logs."
        );
    }

    #[test]
    fn test_every_variant_uses_a_documented_prefix() {
        let prefixes = [
            "Error: Missing required environment variables:",
            "Configuration Error:",
            "Invalid Input:",
            "Download Error:",
            "Upload Error:",
            "Network Error:",
            "An unexpected error occurred. Check logs.",
        ];
        let errors = [
            BridgeError::MissingCredentials(vec!["BOT_TOKEN".into()]),
            BridgeError::Configuration("x".into()),
            BridgeError::InvalidInput("x".into()),
            BridgeError::Http {
                stage: Stage::Download,
                status: 500,
                reason: "Internal Server Error".into(),
            },
            BridgeError::Http {
                stage: Stage::Upload,
                status: 500,
                reason: "Internal Server Error".into(),
            },
            BridgeError::Transport {
                stage: Stage::Download,
                message: "x".into(),
            },
            BridgeError::UploadFailed("x".into()),
            BridgeError::Unexpected("x".into()),
        ];
        for err in errors {
            let msg = err.tool_message();
            assert!(
                prefixes.iter().any(|p| msg.starts_with(p)),
                "undocumented prefix: {msg}"
            );
        }
    }

    #[test]
    fn test_transport_prefix() {
        let err = BridgeError::Transport {
            stage: Stage::Upload,
            message: "operation timed out".into(),
        };
        assert_eq!(
            err.tool_message(),
            "Network Error: upload request failed: operation timed out"
        );
    }
}
