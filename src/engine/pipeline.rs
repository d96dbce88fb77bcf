//! Dialogue generation pipeline.

use std::io::Write;
use std::time::Instant;

use thiserror::Error;

use crate::audio::AudioBuffer;
use crate::backend::{Backend, BackendError, HealthResponse, SynthesizeRequest};
use crate::cli::Model;
use crate::script::{DEFAULT_SPEAKER_PRESET, Direction, Script};

use super::events::{ProgressEvent, SectionTimestamp};

/// Leading silence inserted for a `pause` stage direction.
const PAUSE_MS: u64 = 500;

/// Errors that abort a generation run.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Backend unavailable: {0}")]
    BackendUnavailable(#[from] BackendError),

    #[error("No audio was generated")]
    NoAudio,

    #[error("Progress output failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything a completed run produces, ready to be written out.
#[derive(Debug)]
pub struct RunOutput {
    /// Concatenated, normalized audio.
    pub audio: AudioBuffer,
    /// One entry per contiguous run of same-section units.
    pub timestamps: Vec<SectionTimestamp>,
    /// Units that produced audio.
    pub synthesized: usize,
    /// Units skipped after a synthesis failure or empty response.
    pub skipped: usize,
    /// Mean synthesis wall time per completed unit, if any completed.
    pub mean_unit_secs: Option<f64>,
}

impl RunOutput {
    /// One-line run summary for stderr.
    pub fn summary(&self) -> String {
        format!(
            "Generated {} sections, {:.1}s total, avg {:.1}s/segment",
            self.timestamps.len(),
            self.audio.duration_secs(),
            self.mean_unit_secs.unwrap_or(0.0),
        )
    }
}

/// Drives one script through the backend, unit by unit.
///
/// Per-unit failures are warned to stderr and skipped; the run only
/// aborts when the backend is unreachable or nothing at all was
/// synthesized.
pub struct DialogueEngine<B: Backend> {
    backend: B,
    model: Model,
    lang: String,
    verbose: bool,
}

impl<B: Backend> DialogueEngine<B> {
    /// Create a new engine for the given model.
    pub fn new(backend: B, model: Model, lang: impl Into<String>) -> Self {
        Self {
            backend,
            model,
            lang: lang.into(),
            verbose: false,
        }
    }

    /// Enable per-unit duration output on stderr.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Check backend health status.
    pub fn health_check(&self) -> Result<HealthResponse, EngineError> {
        Ok(self.backend.health()?)
    }

    /// Generate audio for the whole script.
    ///
    /// Emits `generating` progress events to `progress` as it goes; the
    /// surrounding `loading`/`saving`/`done` phases belong to the caller,
    /// which owns file output.
    pub fn run(&self, script: &Script, progress: &mut dyn Write) -> Result<RunOutput, EngineError> {
        let gap_ms = script.gap_ms.unwrap_or(self.model.default_gap_ms());
        let gap_secs = gap_ms as f64 / 1000.0;

        let mut audio = AudioBuffer::new(self.model.sample_rate());
        let mut timestamps = Vec::new();
        let mut unit_times: Vec<f64> = Vec::new();
        let mut synthesized = 0;
        let mut skipped = 0;

        let mut current_time = 0.0;
        let mut current_section: Option<String> = None;
        let mut section_start = 0.0;

        for (i, segment) in script.segments.iter().enumerate() {
            // Close the previous section and insert the gap at each
            // section-id change.
            if current_section.as_deref() != Some(segment.section_id.as_str()) {
                if let Some(section_id) = current_section.take() {
                    timestamps.push(SectionTimestamp {
                        section_id,
                        start_time: section_start,
                        end_time: current_time,
                    });
                    audio.push_silence_ms(gap_ms);
                    current_time += gap_secs;
                }
                current_section = Some(segment.section_id.clone());
                section_start = current_time;
            }

            let est_remaining_seconds = if unit_times.is_empty() {
                None
            } else {
                let avg = unit_times.iter().sum::<f64>() / unit_times.len() as f64;
                Some(avg * (script.segments.len() - i) as f64)
            };

            ProgressEvent::Generating {
                segment_index: i,
                section_id: segment.section_id.clone(),
                est_remaining_seconds,
            }
            .emit(progress)?;

            let text = segment.processed_text();
            if text.trim().is_empty() {
                continue;
            }

            let mut request = SynthesizeRequest::new(text).with_lang(self.lang.clone());
            if self.model.uses_presets() {
                let preset = segment
                    .speaker_preset
                    .clone()
                    .unwrap_or_else(|| DEFAULT_SPEAKER_PRESET.to_string());
                request = request.with_preset(preset);
            }

            let started = Instant::now();
            let samples = match self.backend.synthesize(&request) {
                Ok(samples) => samples,
                Err(e) => {
                    eprintln!("WARNING: Failed segment {i} ({}): {e}", segment.section_id);
                    skipped += 1;
                    continue;
                }
            };
            unit_times.push(started.elapsed().as_secs_f64());

            if samples.is_empty() {
                eprintln!("WARNING: No audio for segment {i} ({})", segment.section_id);
                skipped += 1;
                continue;
            }

            if segment.parsed_direction() == Some(Direction::Pause) {
                audio.push_silence_ms(PAUSE_MS);
                current_time += PAUSE_MS as f64 / 1000.0;
            }

            let duration = samples.len() as f64 / self.model.sample_rate() as f64;
            audio.push(&samples);
            current_time += duration;
            synthesized += 1;

            if self.verbose {
                eprintln!("segment {i} ({}): {duration:.2}s", segment.section_id);
            }
        }

        if let Some(section_id) = current_section {
            timestamps.push(SectionTimestamp {
                section_id,
                start_time: section_start,
                end_time: current_time,
            });
        }

        if audio.is_empty() {
            return Err(EngineError::NoAudio);
        }

        audio.normalize();

        let mean_unit_secs = if unit_times.is_empty() {
            None
        } else {
            Some(unit_times.iter().sum::<f64>() / unit_times.len() as f64)
        };

        Ok(RunOutput {
            audio,
            timestamps,
            synthesized,
            skipped,
            mean_unit_secs,
        })
    }
}
