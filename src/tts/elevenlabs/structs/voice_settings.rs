use serde::{Deserialize, Serialize};

/// Voice tuning parameters passed through to the vendor.
///
/// Example:
/// ```rust
/// use voiceover_tts::tts::elevenlabs::structs::voice_settings::VoiceSettings;
///
/// VoiceSettings {
///     stability: 0.4,
///     similarity_boost: 0.9,
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_speaker_boost: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f32>,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.75,
            style: None,
            use_speaker_boost: None,
            speed: None,
        }
    }
}
