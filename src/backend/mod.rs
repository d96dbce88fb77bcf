//! Backend communication with TTS model servers.
//!
//! Provides traits and implementations for communicating with the
//! Docker-based TTS backends (Bark and Dia).

mod client;
mod types;

pub use client::HttpBackend;
pub use types::{BackendError, HealthResponse, SynthesizeRequest};

use crate::cli::Model;

/// Trait for TTS backend communication.
///
/// This trait abstracts the HTTP communication with the TTS servers,
/// allowing for mock implementations in tests.
#[cfg_attr(test, mockall::automock)]
pub trait Backend: Send + Sync {
    /// Check backend health status.
    fn health(&self) -> Result<HealthResponse, BackendError>;

    /// Synthesize one dialogue unit.
    ///
    /// # Returns
    /// Mono f32 samples at the model's fixed sample rate. An empty
    /// vector means the backend produced no audio for this text.
    fn synthesize(&self, request: &SynthesizeRequest) -> Result<Vec<f32>, BackendError>;
}

/// Create a backend for the specified model.
pub fn create_backend(model: Model, host: &str) -> HttpBackend {
    HttpBackend::new(model, host)
}
