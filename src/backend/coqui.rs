//! Coqui TTS backend driven through its command-line tools.

use std::ffi::OsString;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::config::Config;

use super::Backend;
use super::types::{BackendError, SynthesizeRequest};

/// Asks PyTorch whether CUDA is usable; exit status 0 means yes, 1 means no.
const CUDA_PROBE: &str = "import sys, torch; sys.exit(0 if torch.cuda.is_available() else 1)";

/// Backend that spawns the Coqui `tts` program once per synthesis.
pub struct CoquiBackend {
    tts_command: String,
    python: String,
}

impl CoquiBackend {
    /// Create a backend from explicit program names.
    pub fn new(tts_command: impl Into<String>, python: impl Into<String>) -> Self {
        Self {
            tts_command: tts_command.into(),
            python: python.into(),
        }
    }

    /// Create a backend using the programs named in the configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.tts_command, &config.python)
    }

    /// The synthesis program this backend runs.
    pub fn tts_command(&self) -> &str {
        &self.tts_command
    }

    /// The Python interpreter used for the accelerator probe.
    pub fn python(&self) -> &str {
        &self.python
    }

    /// Build the `tts` invocation for a request without running it.
    ///
    /// Values are attached with `=` so argparse never reads hyphen-leading
    /// text as an option.
    pub fn synthesize_command(&self, request: &SynthesizeRequest) -> Command {
        let mut out_path = OsString::from("--out_path=");
        out_path.push(&request.output);

        let mut cmd = Command::new(&self.tts_command);
        cmd.arg(format!("--model_name={}", request.model))
            .arg(format!("--text={}", request.text))
            .arg(out_path)
            .arg("--progress_bar=false")
            .arg(format!("--device={}", request.device));

        if let Some(speaker) = &request.speaker {
            cmd.arg(format!("--speaker_idx={speaker}"));
        }

        cmd
    }

    /// Build the accelerator probe invocation without running it.
    pub fn probe_command(&self) -> Command {
        let mut cmd = Command::new(&self.python);
        cmd.arg("-c")
            .arg(CUDA_PROBE)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        cmd
    }
}

impl Backend for CoquiBackend {
    fn accelerator_available(&self) -> Result<bool, BackendError> {
        let mut cmd = self.probe_command();
        debug!(python = %self.python, "probing for CUDA");

        let status = cmd.status().map_err(|source| BackendError::Spawn {
            program: self.python.clone(),
            source,
        })?;

        match status.code() {
            Some(0) => Ok(true),
            Some(1) => Ok(false),
            _ => Err(BackendError::Failed {
                program: self.python.clone(),
                status,
            }),
        }
    }

    fn synthesize(&self, request: &SynthesizeRequest) -> Result<(), BackendError> {
        let mut cmd = self.synthesize_command(request);
        debug!(command = ?cmd, "running synthesis");

        // stdout/stderr are inherited so the toolkit's own diagnostics reach the user
        let status = cmd.status().map_err(|source| BackendError::Spawn {
            program: self.tts_command.clone(),
            source,
        })?;

        if !status.success() {
            return Err(BackendError::Failed {
                program: self.tts_command.clone(),
                status,
            });
        }

        if !request.output.is_file() {
            return Err(BackendError::MissingOutput(request.output.clone()));
        }

        Ok(())
    }
}
