//! dialogue-tts-rs CLI entry point.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use dialogue_tts_rs::backend::create_backend;
use dialogue_tts_rs::cli::Args;
use dialogue_tts_rs::engine::{DialogueEngine, ProgressEvent, RunOutput};
use dialogue_tts_rs::script::Script;

fn main() -> Result<()> {
    let args = Args::parse();

    let stdout = std::io::stdout();
    let mut progress = stdout.lock();

    ProgressEvent::Loading.emit(&mut progress)?;

    let backend = create_backend(args.model, &args.host);
    let engine = DialogueEngine::new(backend, args.model, args.lang).with_verbose(args.verbose);

    engine.health_check().with_context(|| {
        format!(
            "{} backend not available at {}. Start the backend first.",
            args.model.name(),
            args.host
        )
    })?;

    let script = Script::load(&args.script)
        .with_context(|| format!("Failed to load script: {}", args.script.display()))?;

    let output = engine
        .run(&script, &mut progress)
        .context("Generation failed")?;

    ProgressEvent::Saving.emit(&mut progress)?;

    write_outputs(&output, &args.output)?;

    ProgressEvent::Done.emit(&mut progress)?;
    eprintln!("{}", output.summary());

    Ok(())
}

/// Write the WAV and its sibling timestamps.json.
fn write_outputs(output: &RunOutput, wav_path: &Path) -> Result<()> {
    output
        .audio
        .write_wav(wav_path)
        .with_context(|| format!("Failed to write audio to: {}", wav_path.display()))?;

    let timestamps_path = wav_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."))
        .join("timestamps.json");

    let json = serde_json::to_string_pretty(&output.timestamps)?;
    let mut file = fs::File::create(&timestamps_path)
        .with_context(|| format!("Failed to create: {}", timestamps_path.display()))?;
    file.write_all(json.as_bytes())
        .with_context(|| format!("Failed to write: {}", timestamps_path.display()))?;

    Ok(())
}
