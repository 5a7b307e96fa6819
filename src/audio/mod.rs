//! Inspection of the audio files the backend produces.

use std::path::Path;

use thiserror::Error;

/// Errors that can occur when reading a produced audio file.
#[derive(Error, Debug)]
pub enum AudioError {
    #[error("Unreadable WAV file: {0}")]
    Wav(#[from] hound::Error),

    #[error("WAV file declares a zero sample rate")]
    ZeroSampleRate,
}

/// Playback length of a WAV file in seconds, from its header.
pub fn duration_secs(path: &Path) -> Result<f32, AudioError> {
    let reader = hound::WavReader::open(path)?;
    let spec = reader.spec();

    if spec.sample_rate == 0 {
        return Err(AudioError::ZeroSampleRate);
    }

    // duration() counts frames, not samples across channels
    Ok(reader.duration() as f32 / spec.sample_rate as f32)
}
