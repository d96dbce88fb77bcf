//! Script document types and stage-direction mapping.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Speaker preset used when a Bark segment does not name one.
pub const DEFAULT_SPEAKER_PRESET: &str = "v2/en_speaker_0";

/// Errors that can occur when loading a script.
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("Failed to read script: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse script: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A dialogue script: an ordered list of units plus a global gap setting.
///
/// Bark scripts name the list `segments`; Dia scripts name it `chunks`.
/// Both spellings are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    #[serde(default, alias = "chunks")]
    pub segments: Vec<Segment>,

    #[serde(rename = "gapMs")]
    pub gap_ms: Option<u64>,
}

impl Script {
    /// Load and parse a script JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

/// One unit of dialogue text attributed to a section.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    #[serde(default = "default_section_id")]
    pub section_id: String,

    #[serde(default)]
    pub text: String,

    pub speaker_preset: Option<String>,

    pub direction: Option<String>,
}

fn default_section_id() -> String {
    "unknown".to_string()
}

impl Segment {
    /// The stage direction, if present and recognized.
    ///
    /// Unrecognized annotations are dropped silently.
    pub fn parsed_direction(&self) -> Option<Direction> {
        self.direction.as_deref().and_then(Direction::parse)
    }

    /// Text sent to the backend: the raw text, prefixed with the
    /// direction's emotion token when one applies.
    pub fn processed_text(&self) -> String {
        match self.parsed_direction().and_then(|d| d.token()) {
            Some(token) => format!("{token} {}", self.text),
            None => self.text.clone(),
        }
    }
}

/// Recognized stage-direction annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Laughter,
    Sigh,
    Gasp,
    /// Inserts leading silence rather than an emotion token.
    Pause,
}

impl Direction {
    /// Parse an annotation, case-insensitively. Singular and plural
    /// spellings are both accepted.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "laughs" | "laughter" => Some(Direction::Laughter),
            "sighs" | "sigh" => Some(Direction::Sigh),
            "gasps" | "gasp" => Some(Direction::Gasp),
            "pauses" | "pause" => Some(Direction::Pause),
            _ => None,
        }
    }

    /// The Bark emotion token for this direction, if it has one.
    pub fn token(&self) -> Option<&'static str> {
        match self {
            Direction::Laughter => Some("[laughter]"),
            Direction::Sigh => Some("[sighs]"),
            Direction::Gasp => Some("[gasps]"),
            Direction::Pause => None,
        }
    }
}
