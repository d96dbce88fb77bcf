//! Script document parsing.

mod types;

pub use types::{DEFAULT_SPEAKER_PRESET, Direction, Script, ScriptError, Segment};
