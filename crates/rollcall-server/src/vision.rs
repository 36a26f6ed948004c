//! Optical-recognition collaborator client
//!
//! Sends an image to the vision chat-completions API with a fixed
//! instruction to extract person names, and returns the free-form text
//! answer. Failures surface as [`ApiError::Recognition`]; there is no
//! automatic retry.

use serde_json::json;
use tracing::error;

use crate::error::{ApiError, Result};

const MODEL: &str = "glm-4v-flash";
const EXTRACTION_INSTRUCTION: &str = "请识别图片中的所有人名，用逗号分隔输出";

/// Client for the vision API
pub struct VisionClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl VisionClient {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Ask the collaborator to extract person names from a base64-encoded
    /// image. Returns the trimmed free-form text answer.
    pub async fn extract_names(&self, image_base64: &str) -> Result<String> {
        let payload = json!({
            "model": MODEL,
            "messages": [{
                "role": "user",
                "content": [
                    { "type": "text", "text": EXTRACTION_INSTRUCTION },
                    {
                        "type": "image_url",
                        "image_url": { "url": format!("data:image/jpeg;base64,{image_base64}") }
                    }
                ]
            }]
        });

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "vision API request failed");
                ApiError::Recognition(e.to_string())
            })?
            .error_for_status()
            .map_err(|e| {
                error!(error = %e, "vision API returned an error status");
                ApiError::Recognition(e.to_string())
            })?;

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ApiError::Recognition(format!("invalid response body: {}", e)))?;

        let content = body["choices"][0]["message"]["content"]
            .as_str()
            .unwrap_or_default();

        Ok(content.trim().to_string())
    }
}
