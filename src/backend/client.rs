//! HTTP client for backend communication.

use std::io::Cursor;

use hound::{SampleFormat, WavReader};

use crate::cli::Model;

use super::Backend;
use super::types::{BackendError, HealthResponse, SynthesizeRequest};

/// HTTP-based backend client.
pub struct HttpBackend {
    base_url: String,
    client: reqwest::blocking::Client,
    model: Model,
}

impl HttpBackend {
    /// Create a new HTTP backend client.
    pub fn new(model: Model, host: &str) -> Self {
        let port = model.port();
        let base_url = format!("http://{host}:{port}");

        Self {
            base_url,
            client: reqwest::blocking::Client::new(),
            model,
        }
    }

    /// Get the base URL for this backend.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Decode a WAV payload into mono f32 samples.
    ///
    /// Multi-channel payloads are downmixed by averaging. The payload's
    /// sample rate must match the model's fixed rate; resampling is the
    /// backend's job, not ours.
    fn decode_wav(&self, bytes: &[u8]) -> Result<Vec<f32>, BackendError> {
        let mut reader = WavReader::new(Cursor::new(bytes))
            .map_err(|e| BackendError::DecodeFailed(e.to_string()))?;
        let spec = reader.spec();

        if spec.sample_rate != self.model.sample_rate() {
            return Err(BackendError::DecodeFailed(format!(
                "expected {} Hz from {}, got {} Hz",
                self.model.sample_rate(),
                self.model.name(),
                spec.sample_rate
            )));
        }

        let channels = spec.channels as usize;
        let mut interleaved = Vec::new();

        match spec.sample_format {
            SampleFormat::Float => {
                for sample in reader.samples::<f32>() {
                    interleaved.push(sample.map_err(|e| BackendError::DecodeFailed(e.to_string()))?);
                }
            }
            SampleFormat::Int => {
                let max = (1_i64 << (spec.bits_per_sample - 1)) as f32;
                for sample in reader.samples::<i32>() {
                    let value =
                        sample.map_err(|e| BackendError::DecodeFailed(e.to_string()))? as f32;
                    interleaved.push(value / max);
                }
            }
        }

        if channels <= 1 {
            return Ok(interleaved);
        }

        let mono = interleaved
            .chunks(channels)
            .map(|frame| frame.iter().sum::<f32>() / channels as f32)
            .collect();
        Ok(mono)
    }
}

impl Backend for HttpBackend {
    fn health(&self) -> Result<HealthResponse, BackendError> {
        let url = format!("{}/health", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| BackendError::ConnectionFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(BackendError::RequestFailed(format!(
                "Status: {}",
                response.status()
            )));
        }

        response
            .json()
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }

    fn synthesize(&self, request: &SynthesizeRequest) -> Result<Vec<f32>, BackendError> {
        let url = format!("{}/synthesize", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .map_err(|e| BackendError::ConnectionFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(BackendError::RequestFailed(format!(
                "Status: {}",
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))?;

        if bytes.is_empty() {
            return Ok(Vec::new());
        }

        self.decode_wav(&bytes)
    }
}
