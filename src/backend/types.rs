//! Backend request types and errors.

use std::fmt;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors that can occur when driving the synthesis backend.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}")]
    Failed { program: String, status: ExitStatus },

    #[error("Backend reported success but wrote no file at {0}")]
    MissingOutput(PathBuf),
}

/// Compute device the model runs on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Device {
    Cuda,
    #[default]
    Cpu,
}

impl Device {
    /// Accelerated device when available, CPU otherwise.
    pub fn select(accelerated: bool) -> Self {
        if accelerated { Device::Cuda } else { Device::Cpu }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Device::Cuda => "cuda",
            Device::Cpu => "cpu",
        }
    }

    pub fn is_accelerated(&self) -> bool {
        matches!(self, Device::Cuda)
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request for speech synthesis.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesizeRequest {
    pub model: String,
    pub text: String,
    pub output: PathBuf,
    /// Only set for multi-speaker models; `None` means no speaker argument.
    pub speaker: Option<String>,
    pub device: Device,
}

impl SynthesizeRequest {
    /// Create a new synthesis request on the CPU with no speaker.
    pub fn new(
        model: impl Into<String>,
        text: impl Into<String>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            model: model.into(),
            text: text.into(),
            output: output.into(),
            speaker: None,
            device: Device::Cpu,
        }
    }

    /// Set the speaker. Empty names are treated as no speaker.
    pub fn with_speaker(mut self, speaker: Option<impl Into<String>>) -> Self {
        self.speaker = speaker.map(Into::into).filter(|s: &String| !s.is_empty());
        self
    }

    /// Set the compute device.
    pub fn with_device(mut self, device: Device) -> Self {
        self.device = device;
        self
    }
}
