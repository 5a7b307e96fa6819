//! Backend communication with the speech synthesis toolkit.
//!
//! Provides the trait the engine talks to and the Coqui TTS implementation
//! that runs the toolkit as child processes.

mod coqui;
mod types;

pub use coqui::CoquiBackend;
pub use types::{BackendError, Device, SynthesizeRequest};

use crate::config::Config;

/// Trait for the synthesis collaborator.
///
/// The model work is opaque; the engine only needs an accelerator query and
/// one synthesis call. Mocked in tests.
#[cfg_attr(test, mockall::automock)]
pub trait Backend {
    /// Whether hardware acceleration (CUDA) is available.
    fn accelerator_available(&self) -> Result<bool, BackendError>;

    /// Synthesize speech and write it to `request.output`.
    ///
    /// # Arguments
    /// * `request` - Model, text, output path, device and optional speaker
    fn synthesize(&self, request: &SynthesizeRequest) -> Result<(), BackendError>;
}

/// Create the backend described by the configuration.
pub fn create_backend(config: &Config) -> CoquiBackend {
    CoquiBackend::from_config(config)
}
