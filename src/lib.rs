//! quick-tts: text-to-speech from a fixed table of voices.
//!
//! This crate maps short voice ids to Coqui TTS models (and speakers, for
//! multi-speaker models) and drives the Coqui toolkit to write audio files.

pub mod audio;
pub mod backend;
pub mod cli;
pub mod config;
pub mod engine;
pub mod voice;
