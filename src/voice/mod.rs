//! Voice registry.
//!
//! A fixed, ordered table of voices. Each voice names a Coqui model and, for
//! multi-speaker models, the speaker to use.

mod registry;

pub use registry::{BUILTIN_VOICES, VoiceError, VoiceRecord, VoiceRegistry};
