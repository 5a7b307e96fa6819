//! Built-in voice table and lookup.

use std::collections::HashMap;
use std::sync::LazyLock;

use thiserror::Error;

/// Errors that can occur when resolving voices.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum VoiceError {
    #[error("Unknown voice_id '{0}'")]
    UnknownVoice(String),

    #[error("Duplicate voice id: {0}")]
    DuplicateVoiceId(String),
}

/// A named synthesis configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceRecord {
    pub id: &'static str,
    pub label: &'static str,
    pub model: &'static str,
    /// Speaker within a multi-speaker model.
    pub speaker: Option<&'static str>,
}

impl VoiceRecord {
    const fn single(id: &'static str, label: &'static str, model: &'static str) -> Self {
        Self {
            id,
            label,
            model,
            speaker: None,
        }
    }

    const fn vctk(id: &'static str, label: &'static str, speaker: &'static str) -> Self {
        Self {
            id,
            label,
            model: VCTK_VITS,
            speaker: Some(speaker),
        }
    }

    /// Speaker to pass to the backend, if any. Empty speakers count as absent.
    pub fn speaker(&self) -> Option<&'static str> {
        self.speaker.filter(|s| !s.is_empty())
    }
}

const VCTK_VITS: &str = "tts_models/en/vctk/vits";

/// Voices shipped with the binary, in display order.
pub const BUILTIN_VOICES: &[VoiceRecord] = &[
    // Single-speaker models
    VoiceRecord::single(
        "lj_vits",
        "Female US (LJSpeech VITS)",
        "tts_models/en/ljspeech/vits",
    ),
    VoiceRecord::single(
        "sam_tacotron",
        "Neutral Mid (Sam Tacotron-DDC)",
        "tts_models/en/sam/tacotron-DDC",
    ),
    VoiceRecord::single(
        "ek1_tacotron2",
        "UK Female (ek1 Tacotron2)",
        "tts_models/en/ek1/tacotron2",
    ),
    // VCTK male
    VoiceRecord::vctk("vctk_male_p226", "VCTK Male p226", "p226"),
    VoiceRecord::vctk("vctk_male_p229", "VCTK Male p229", "p229"),
    VoiceRecord::vctk("vctk_male_p231", "VCTK Male p231", "p231"),
    // VCTK female
    VoiceRecord::vctk("vctk_female_p225", "VCTK Female p225", "p225"),
    VoiceRecord::vctk("vctk_female_p228", "VCTK Female p228", "p228"),
    // VCTK higher-pitch character voices
    VoiceRecord::vctk("vctk_char_p268", "VCTK Character High p268", "p268"),
    VoiceRecord::vctk("vctk_char_p306", "VCTK Character High p306", "p306"),
    // VCTK additional speakers
    VoiceRecord::vctk("vctk_p284", "VCTK p284", "p284"),
    VoiceRecord::vctk("vctk_p285", "VCTK p285", "p285"),
];

static BUILTIN: LazyLock<VoiceRegistry> = LazyLock::new(|| {
    VoiceRegistry::from_records(BUILTIN_VOICES).expect("built-in voice ids are unique")
});

/// Read-only id -> record mapping over an ordered voice list.
#[derive(Debug)]
pub struct VoiceRegistry {
    records: &'static [VoiceRecord],
    by_id: HashMap<&'static str, usize>,
}

impl VoiceRegistry {
    /// The registry built from [`BUILTIN_VOICES`].
    pub fn builtin() -> &'static VoiceRegistry {
        &BUILTIN
    }

    /// Build a registry, rejecting duplicate ids.
    pub fn from_records(records: &'static [VoiceRecord]) -> Result<Self, VoiceError> {
        let mut by_id = HashMap::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            if by_id.insert(record.id, index).is_some() {
                return Err(VoiceError::DuplicateVoiceId(record.id.to_string()));
            }
        }

        Ok(Self { records, by_id })
    }

    /// All records in declaration order.
    pub fn list(&self) -> &'static [VoiceRecord] {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// One `- {id}: {label}` line per record, in declaration order.
    pub fn summary(&self) -> String {
        self.records
            .iter()
            .map(|record| format!("- {}: {}", record.id, record.label))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Find a record by exact, case-sensitive id.
    pub fn lookup(&self, id: &str) -> Result<&'static VoiceRecord, VoiceError> {
        let records = self.records;
        self.by_id
            .get(id)
            .map(|&index| &records[index])
            .ok_or_else(|| VoiceError::UnknownVoice(id.to_string()))
    }
}
