//! TTS Engine orchestrator.
//!
//! This module provides the engine that coordinates between the voice
//! registry, the output filesystem and the synthesis backend.

mod output;
mod tts;

pub use output::{expand_home, expand_home_with, prepare_output};
pub use tts::{SynthesisJob, SynthesisReport, TTSEngine, TTSError, Target, resolve};
