//! Optional user configuration.
//!
//! Lives in `~/.quick-tts/config.json` and only names the external programs;
//! every field has a default, so the file never has to exist.

mod settings;

pub use settings::{Config, ConfigError};
