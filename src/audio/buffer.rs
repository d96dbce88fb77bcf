//! Mono audio accumulation and WAV output.

use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};
use thiserror::Error;

/// Normalization target: peak amplitude after scaling.
const NORMALIZE_PEAK: f32 = 0.95;

/// Errors that can occur when writing audio.
#[derive(Error, Debug)]
pub enum AudioError {
    #[error("WAV write failed: {0}")]
    Wav(#[from] hound::Error),
}

/// Accumulates mono f32 samples at a fixed sample rate.
///
/// Units are appended in document order; the buffer is normalized once,
/// after the last append, then written out.
#[derive(Debug, Clone)]
pub struct AudioBuffer {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl AudioBuffer {
    pub fn new(sample_rate: u32) -> Self {
        Self {
            samples: Vec::new(),
            sample_rate,
        }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Total buffered duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Append synthesized samples.
    pub fn push(&mut self, samples: &[f32]) {
        self.samples.extend_from_slice(samples);
    }

    /// Append `ms` milliseconds of silence.
    pub fn push_silence_ms(&mut self, ms: u64) {
        let count = Self::silence_len(self.sample_rate, ms);
        self.samples.resize(self.samples.len() + count, 0.0);
    }

    /// Number of samples covering `ms` milliseconds at `sample_rate`.
    pub fn silence_len(sample_rate: u32, ms: u64) -> usize {
        (sample_rate as u64 * ms / 1000) as usize
    }

    /// Scale the buffer so its peak amplitude is 0.95.
    ///
    /// All-zero audio is left untouched.
    pub fn normalize(&mut self) {
        let peak = self.samples.iter().fold(0.0_f32, |m, s| m.max(s.abs()));
        if peak > 0.0 {
            let scale = NORMALIZE_PEAK / peak;
            for sample in &mut self.samples {
                *sample *= scale;
            }
        }
    }

    /// Write the buffer as a 16-bit PCM mono WAV file.
    pub fn write_wav(&self, path: impl AsRef<Path>) -> Result<(), AudioError> {
        let spec = WavSpec {
            channels: 1,
            sample_rate: self.sample_rate,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut writer = WavWriter::create(path, spec)?;

        for &sample in &self.samples {
            let value = sample.clamp(-1.0, 1.0);
            let scaled = (value * i16::MAX as f32).round() as i16;
            writer.write_sample(scaled)?;
        }

        writer.finalize()?;
        Ok(())
    }
}
