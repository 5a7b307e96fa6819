//! TTS Engine implementation.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::audio;
use crate::backend::{Backend, BackendError, Device, SynthesizeRequest};
use crate::voice::{VoiceError, VoiceRecord, VoiceRegistry};

use super::output::prepare_output;

/// Errors that can occur during TTS operations.
#[derive(Error, Debug)]
pub enum TTSError {
    #[error(transparent)]
    Voice(#[from] VoiceError),

    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("Failed to create output directory for {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TTSError {
    /// The requested id, if this error is an unknown voice.
    pub fn unknown_voice(&self) -> Option<&str> {
        match self {
            TTSError::Voice(VoiceError::UnknownVoice(id)) => Some(id),
            _ => None,
        }
    }
}

/// A resolved synthesis: voice, device and the prepared output path.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisJob {
    pub voice: &'static VoiceRecord,
    pub device: Device,
    pub output: PathBuf,
}

/// Outcome of a finished synthesis.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisReport {
    pub output: PathBuf,
    /// Length of the written audio, when it could be read back as WAV.
    pub duration_secs: Option<f32>,
}

/// A voice and a ready output path, before any backend is involved.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub voice: &'static VoiceRecord,
    pub output: PathBuf,
}

/// Expand `output`, create its parent directories, then look up `voice_id`.
///
/// Directories are created before the lookup, so they exist even when the id
/// turns out to be unknown.
pub fn resolve(
    registry: &VoiceRegistry,
    voice_id: &str,
    output: &Path,
) -> Result<Target, TTSError> {
    let prepared = prepare_output(output).map_err(|source| TTSError::OutputDir {
        path: output.to_path_buf(),
        source,
    })?;

    let voice = registry.lookup(voice_id)?;

    Ok(Target {
        voice,
        output: prepared,
    })
}

/// The main TTS engine that orchestrates between components.
pub struct TTSEngine<B: Backend> {
    backend: B,
    registry: &'static VoiceRegistry,
}

impl<B: Backend> TTSEngine<B> {
    /// Create a new TTS engine.
    pub fn new(backend: B, registry: &'static VoiceRegistry) -> Self {
        Self { backend, registry }
    }

    pub fn registry(&self) -> &'static VoiceRegistry {
        self.registry
    }

    /// Listing of every voice, one `- {id}: {label}` line each.
    pub fn summary(&self) -> String {
        self.registry.summary()
    }

    /// Resolve everything needed before synthesis.
    pub fn prepare(&self, voice_id: &str, output: &Path) -> Result<SynthesisJob, TTSError> {
        let target = resolve(self.registry, voice_id, output)?;
        Ok(self.job_for(target))
    }

    /// Pick the device for an already resolved target.
    pub fn job_for(&self, target: Target) -> SynthesisJob {
        SynthesisJob {
            voice: target.voice,
            device: self.select_device(),
            output: target.output,
        }
    }

    /// Pick CUDA when the backend reports it, otherwise CPU.
    pub fn select_device(&self) -> Device {
        match self.backend.accelerator_available() {
            Ok(available) => Device::select(available),
            Err(e) => {
                warn!(error = %e, "accelerator query failed, falling back to cpu");
                Device::Cpu
            }
        }
    }

    /// Synthesize `text` for a prepared job.
    pub fn run(&self, job: &SynthesisJob, text: &str) -> Result<SynthesisReport, TTSError> {
        let request = SynthesizeRequest::new(job.voice.model, text, &job.output)
            .with_speaker(job.voice.speaker())
            .with_device(job.device);

        self.backend.synthesize(&request)?;

        let duration_secs = match audio::duration_secs(&job.output) {
            Ok(secs) => Some(secs),
            Err(e) => {
                debug!(error = %e, path = %job.output.display(), "could not read output duration");
                None
            }
        };

        Ok(SynthesisReport {
            output: job.output.clone(),
            duration_secs,
        })
    }
}
