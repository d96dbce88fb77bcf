//! Generation pipeline orchestrator.
//!
//! This module drives the script through the backend one unit at a
//! time, accumulating audio, section timestamps, and progress events.

mod events;
mod pipeline;

pub use events::{ProgressEvent, SectionTimestamp};
pub use pipeline::{DialogueEngine, EngineError, RunOutput};
