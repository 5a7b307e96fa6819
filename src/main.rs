//! quick-tts CLI entry point.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use quick_tts::backend::{Backend, create_backend};
use quick_tts::cli::{Invocation, program_name, usage};
use quick_tts::config::Config;
use quick_tts::engine::{TTSEngine, Target, resolve};
use quick_tts::voice::VoiceRegistry;
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    init_logging();

    let argv: Vec<_> = std::env::args_os().collect();
    let invocation = match Invocation::parse_from(&argv) {
        Ok(invocation) => invocation,
        Err(_) => {
            eprintln!("{}", usage(&program_name(argv.first())));
            return Ok(ExitCode::FAILURE);
        }
    };

    match invocation {
        Invocation::List => {
            list_voices(VoiceRegistry::builtin());
            Ok(ExitCode::SUCCESS)
        }
        Invocation::Synthesize {
            voice_id,
            text,
            output,
        } => generate_speech(&voice_id, &text, &output),
    }
}

/// Logs go to stderr so stdout carries only the status lines.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn list_voices(registry: &VoiceRegistry) {
    println!("Available voice IDs:");
    println!("{}", registry.summary());
}

fn generate_speech(voice_id: &str, text: &str, output: &Path) -> Result<ExitCode> {
    let registry = VoiceRegistry::builtin();
    let target = match resolve(registry, voice_id, output) {
        Ok(target) => target,
        Err(e) if e.unknown_voice().is_some() => {
            eprintln!("[quick-tts] Unknown voice_id '{voice_id}'\n");
            eprintln!("{}", registry.summary());
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(anyhow::Error::new(e).context("Failed to prepare synthesis")),
    };

    // the backend is only configured once the voice is known
    let config = Config::load().context("Failed to load configuration")?;
    let engine = TTSEngine::new(create_backend(&config), registry);
    synthesize(&engine, target, text)
}

fn synthesize<B: Backend>(engine: &TTSEngine<B>, target: Target, text: &str) -> Result<ExitCode> {
    let job = engine.job_for(target);

    println!(
        "[quick-tts] id={} label={} model={} device={}",
        job.voice.id, job.voice.label, job.voice.model, job.device
    );
    println!("[quick-tts] Generating -> {}", job.output.display());

    let report = engine
        .run(&job, text)
        .with_context(|| format!("Failed to synthesize speech to {}", job.output.display()))?;

    match report.duration_secs {
        Some(secs) => println!("[quick-tts] Done. ({secs:.2}s of audio)"),
        None => println!("[quick-tts] Done."),
    }

    Ok(ExitCode::SUCCESS)
}
