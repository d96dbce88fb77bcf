//! CLI argument definitions and parsing.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Multi-speaker dialogue audio generation CLI.
#[derive(Parser, Debug)]
#[command(name = "dialogue-tts-rs")]
#[command(about = "Generate multi-speaker dialogue audio from a JSON script")]
#[command(version)]
pub struct Args {
    /// Path to the script JSON file
    #[arg(short, long)]
    pub script: PathBuf,

    /// Output WAV file (timestamps.json is written next to it)
    #[arg(short, long, default_value = "output.wav")]
    pub output: PathBuf,

    /// TTS model to use: "bark" (per-segment presets) or "dia" (speaker-tagged chunks)
    #[arg(short, long, value_enum, default_value = "bark")]
    pub model: Model,

    /// Language code forwarded to the backend (en/es)
    #[arg(short, long, default_value = "en")]
    pub lang: String,

    /// Backend host address
    #[arg(long, default_value = "localhost")]
    pub host: String,

    /// Echo per-segment durations to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// TTS model selection.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Model {
    /// Bark (multilingual, speaker presets, emotion tokens)
    #[default]
    #[value(name = "bark")]
    Bark,

    /// Dia 1.6B (native [S1]/[S2] dialogue tags)
    #[value(name = "dia")]
    Dia,
}

impl Model {
    /// Returns the CLI argument string for this model.
    pub fn as_str(&self) -> &'static str {
        match self {
            Model::Bark => "bark",
            Model::Dia => "dia",
        }
    }

    /// Returns the backend server port for this model.
    pub fn port(&self) -> u16 {
        match self {
            Model::Bark => 9282,
            Model::Dia => 9284,
        }
    }

    /// Returns the human-readable name of the model.
    pub fn name(&self) -> &'static str {
        match self {
            Model::Bark => "Bark",
            Model::Dia => "Dia-1.6B",
        }
    }

    /// Fixed output sample rate of the model, in Hz.
    pub fn sample_rate(&self) -> u32 {
        match self {
            Model::Bark => 24_000,
            Model::Dia => 44_100,
        }
    }

    /// Inter-section silence gap used when the script does not set one.
    pub fn default_gap_ms(&self) -> u64 {
        match self {
            Model::Bark => 400,
            Model::Dia => 300,
        }
    }

    /// Whether the model consumes per-segment speaker presets.
    ///
    /// Dia encodes speakers inline as [S1]/[S2] tags, so presets are
    /// not forwarded for it.
    pub fn uses_presets(&self) -> bool {
        matches!(self, Model::Bark)
    }
}
