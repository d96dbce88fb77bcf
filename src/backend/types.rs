//! Backend request/response types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when communicating with the backend.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Audio decode failed: {0}")]
    DecodeFailed(String),
}

/// Health check response from backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
    pub cuda_available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpu: Option<String>,
    pub device: String,
}

/// Request for synthesis of one dialogue unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesizeRequest {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaker_preset: Option<String>,
    #[serde(default = "default_lang")]
    pub lang: String,
}

fn default_lang() -> String {
    "en".to_string()
}

impl SynthesizeRequest {
    /// Create a new synthesis request.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            speaker_preset: None,
            lang: "en".to_string(),
        }
    }

    /// Set the Bark speaker preset.
    pub fn with_preset(mut self, preset: impl Into<String>) -> Self {
        self.speaker_preset = Some(preset.into());
        self
    }

    /// Set the language code.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }
}
