//! Request and response models for the HTTP API
//!
//! Template create/update bodies reuse the store's `TemplateInput` and
//! `TemplateUpdate`; the template shape is the wire shape.

use serde::{Deserialize, Serialize};

/// Success-message body for update/delete operations
#[derive(Debug, Serialize)]
pub struct OperationResponse {
    pub success: bool,
    pub message: String,
}

impl OperationResponse {
    pub fn new(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }
}

/// Body of `POST /api/recognize-image`
#[derive(Debug, Deserialize)]
pub struct RecognizeImageRequest {
    #[serde(rename = "imageBase64", default)]
    pub image_base64: String,
}

/// Response of `POST /api/recognize-image`
///
/// `data` carries the raw collaborator output, `names` the normalized
/// token list extracted from it.
#[derive(Debug, Serialize)]
pub struct RecognizeImageResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RecognizeImageResponse {
    pub fn ok(data: String, names: Vec<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            names: Some(names),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            names: None,
            error: Some(error),
        }
    }
}

/// Body of `POST /api/compare`: two free-form name lists
#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    #[serde(default)]
    pub expected: String,
    #[serde(default)]
    pub actual: String,
}

/// Response of `POST /api/compare`
#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub expected: Vec<String>,
    pub actual: Vec<String>,
    pub absentees: Vec<String>,
}
