//! dialogue-tts-rs: Multi-speaker dialogue audio generation CLI.
//!
//! This crate provides a command-line interface that turns a JSON
//! dialogue script into a single WAV file plus a timestamp index,
//! delegating speech synthesis to a Bark or Dia TTS backend.

pub mod audio;
pub mod backend;
pub mod cli;
pub mod engine;
pub mod script;
