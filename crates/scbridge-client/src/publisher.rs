//! Upload of payloads to Cloudinary

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use scbridge_core::{BridgeError, BridgeResult, BridgeSettings, CloudinaryCredentials, Stage};
use serde_json::Value;

use crate::http::transport_error;
use crate::signature::sign;

const UPLOAD_FILE_NAME: &str = "slack-image";

/// Publishes a payload and returns its public URL.
///
/// Credentials are passed per call, so concurrent publishes never share
/// mutable client configuration.
#[async_trait]
pub trait Publisher: Send + Sync {
    async fn publish(
        &self,
        payload: Bytes,
        credentials: &CloudinaryCredentials,
    ) -> BridgeResult<String>;
}

/// Signed uploads to the Cloudinary image upload endpoint.
#[derive(Debug, Clone)]
pub struct CloudinaryPublisher {
    client: Client,
    upload_prefix: String,
    folder: Option<String>,
}

impl CloudinaryPublisher {
    pub fn new(client: Client, settings: &BridgeSettings) -> Self {
        Self {
            client,
            upload_prefix: settings.upload_prefix.trim_end_matches('/').to_string(),
            folder: settings.upload_folder.clone(),
        }
    }

    pub fn upload_url(&self, cloud_name: &str) -> String {
        format!("{}/v1_1/{}/image/upload", self.upload_prefix, cloud_name)
    }

    fn signed_params(&self, timestamp: i64) -> Vec<(&'static str, String)> {
        let mut params = vec![("timestamp", timestamp.to_string())];
        if let Some(folder) = &self.folder {
            params.push(("folder", folder.clone()));
        }
        params
    }
}

#[async_trait]
impl Publisher for CloudinaryPublisher {
    async fn publish(
        &self,
        payload: Bytes,
        credentials: &CloudinaryCredentials,
    ) -> BridgeResult<String> {
        let missing = credentials.missing();
        if !missing.is_empty() {
            return Err(BridgeError::Configuration(format!(
                "Missing Cloudinary environment variables: {}",
                missing.join(", ")
            )));
        }

        let params = self.signed_params(chrono::Utc::now().timestamp());
        let signature = sign(&params, &credentials.api_secret);
        let payload_len = payload.len();

        let file =
            Part::stream_with_length(payload, payload_len as u64).file_name(UPLOAD_FILE_NAME);
        let mut form = Form::new()
            .part("file", file)
            .text("api_key", credentials.api_key.clone());
        for (name, value) in params {
            form = form.text(name, value);
        }
        form = form.text("signature", signature);

        let response = self
            .client
            .post(self.upload_url(&credentials.cloud_name))
            .multipart(form)
            .send()
            .await
            .map_err(|e| transport_error(Stage::Upload, e))?;

        let status = response.status();
        let raw = response
            .text()
            .await
            .map_err(|e| transport_error(Stage::Upload, e))?;

        if !status.is_success() {
            tracing::warn!(
                status = status.as_u16(),
                cloud_name = %credentials.cloud_name,
                "Cloudinary rejected upload"
            );
            return Err(BridgeError::UploadFailed(raw));
        }

        let secure_url = extract_secure_url(&raw).ok_or(BridgeError::UploadFailed(raw))?;

        tracing::debug!(bytes = payload_len, "Uploaded payload to Cloudinary");
        Ok(secure_url)
    }
}

/// `secure_url` from an upload response body, if it is a JSON object carrying one.
pub fn extract_secure_url(raw: &str) -> Option<String> {
    let body: Value = serde_json::from_str(raw).ok()?;
    body.get("secure_url")?
        .as_str()
        .filter(|url| !url.is_empty())
        .map(str::to_string)
}
