use serde::{Deserialize, Serialize};

use super::elevenlabs::structs::{
    normalization::TextNormalization,
    synthesize_request::{SynthesisRequest, TextToSpeechBody},
    voice::Voice,
    voice_settings::VoiceSettings,
};
use crate::errors::{constants::*, Result, VoiceoverError};

/// Instance-level defaults, fixed at service construction.
///
/// `voice_name` and `voice_id` only select the voice, resolution against
/// the vendor catalog happens once when the service is built.
#[derive(Clone, Debug)]
pub struct ServiceSettings {
    pub voice_name: Option<String>,
    pub voice_id: Option<String>,
    pub model: String,
    pub voice_settings: Option<VoiceSettings>,
    pub output_format: String,
    pub enable_logging: Option<bool>,
    pub optimize_streaming_latency: Option<u8>,
    pub language_code: Option<String>,
    pub apply_text_normalization: Option<TextNormalization>,
    pub apply_language_text_normalization: Option<bool>,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            voice_name: None,
            voice_id: None,
            model: DEFAULT_MODEL.to_string(),
            voice_settings: None,
            output_format: DEFAULT_OUTPUT_FORMAT.to_string(),
            enable_logging: None,
            optimize_streaming_latency: None,
            language_code: None,
            apply_text_normalization: None,
            apply_language_text_normalization: None,
        }
    }
}

impl ServiceSettings {
    /// Reject parameter combinations the vendor would refuse later.
    pub fn validate(&self) -> Result<()> {
        if let Some(language_code) = &self.language_code {
            if !LANGUAGE_CODE_MODELS.contains(&self.model.as_str()) {
                return Err(VoiceoverError::unsupported_language(
                    language_code,
                    &self.model,
                ));
            }
        }
        if let Some(latency) = self.optimize_streaming_latency {
            if latency > MAX_LATENCY_OPTIMIZATION {
                return Err(VoiceoverError::config(format!(
                    "optimize_streaming_latency must be 0-{}, got {}",
                    MAX_LATENCY_OPTIMIZATION, latency
                )));
            }
        }
        Ok(())
    }
}

/// Per-request overrides. `None` means "not provided", the instance
/// default applies; `Some(false)` is an explicit value and wins.
#[derive(Clone, Debug, Default)]
pub struct SynthesisOverrides {
    pub voice_settings: Option<VoiceSettings>,
    pub enable_logging: Option<bool>,
    pub optimize_streaming_latency: Option<u8>,
    pub language_code: Option<String>,
    pub apply_text_normalization: Option<TextNormalization>,
    pub apply_language_text_normalization: Option<bool>,
    pub seed: Option<u64>,
    pub previous_text: Option<String>,
    pub next_text: Option<String>,
    pub previous_request_ids: Option<Vec<String>>,
    pub next_request_ids: Option<Vec<String>>,
    /// Accumulator id for consecutive narration, see the service docs.
    pub text_id: Option<String>,
    /// Explicit output file name; not part of the cache key.
    pub output_name: Option<String>,
}

/// The fully merged parameter set for one request.
///
/// Serialized with every field present and in declaration order, so the
/// serialization is canonical and usable as cache-key input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MergedConfig {
    pub model: String,
    pub voice_id: String,
    pub voice_name: String,
    pub voice_settings: Option<VoiceSettings>,
    pub output_format: String,
    pub enable_logging: Option<bool>,
    pub optimize_streaming_latency: Option<u8>,
    pub language_code: Option<String>,
    pub seed: Option<u64>,
    pub previous_text: Option<String>,
    pub next_text: Option<String>,
    pub previous_request_ids: Option<Vec<String>>,
    pub next_request_ids: Option<Vec<String>>,
    pub apply_text_normalization: Option<TextNormalization>,
    pub apply_language_text_normalization: Option<bool>,
}

impl MergedConfig {
    /// Apply per-request overrides over the instance defaults, field by
    /// field, and pin the resolved voice identity.
    pub fn merge(settings: &ServiceSettings, voice: &Voice, overrides: &SynthesisOverrides) -> Self {
        Self {
            model: settings.model.clone(),
            voice_id: voice.voice_id.clone(),
            voice_name: voice.name.clone(),
            voice_settings: overrides
                .voice_settings
                .clone()
                .or_else(|| settings.voice_settings.clone()),
            output_format: settings.output_format.clone(),
            enable_logging: overrides.enable_logging.or(settings.enable_logging),
            optimize_streaming_latency: overrides
                .optimize_streaming_latency
                .or(settings.optimize_streaming_latency),
            language_code: overrides
                .language_code
                .clone()
                .or_else(|| settings.language_code.clone()),
            seed: overrides.seed,
            previous_text: overrides.previous_text.clone(),
            next_text: overrides.next_text.clone(),
            previous_request_ids: overrides.previous_request_ids.clone(),
            next_request_ids: overrides.next_request_ids.clone(),
            apply_text_normalization: overrides
                .apply_text_normalization
                .or(settings.apply_text_normalization),
            apply_language_text_normalization: overrides
                .apply_language_text_normalization
                .or(settings.apply_language_text_normalization),
        }
    }

    /// Map the merged parameters onto a vendor call for `text`.
    pub fn to_request(&self, text: &str) -> SynthesisRequest {
        SynthesisRequest {
            voice_id: self.voice_id.clone(),
            output_format: self.output_format.clone(),
            enable_logging: self.enable_logging,
            optimize_streaming_latency: self.optimize_streaming_latency,
            body: TextToSpeechBody {
                text: text.to_string(),
                model_id: self.model.clone(),
                voice_settings: self.voice_settings.clone(),
                language_code: self.language_code.clone(),
                seed: self.seed,
                previous_text: self.previous_text.clone(),
                next_text: self.next_text.clone(),
                previous_request_ids: self.previous_request_ids.clone(),
                next_request_ids: self.next_request_ids.clone(),
                apply_text_normalization: self.apply_text_normalization,
                apply_language_text_normalization: self.apply_language_text_normalization,
            },
        }
    }
}

/// Cache-entry input record: the stripped text plus the merged parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputData {
    pub input_text: String,
    pub service: String,
    pub config: MergedConfig,
}

impl InputData {
    pub fn new(input_text: impl Into<String>, config: MergedConfig) -> Self {
        Self {
            input_text: input_text.into(),
            service: SERVICE_NAME.to_string(),
            config,
        }
    }
}
