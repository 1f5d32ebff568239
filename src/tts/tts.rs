use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use tracing::{info, warn};

use super::elevenlabs::elevenlabs::ElevenLabsClient;
use super::elevenlabs::structs::voice::Voice;
use super::elevenlabs::SpeechApi;
use super::params::{InputData, MergedConfig, ServiceSettings, SynthesisOverrides};
use crate::cache::cache::AudioCache;
use crate::cache::cache_key::CacheKey;
use crate::cache::entry::SpeechMetadata;
use crate::config::ApiKey;
use crate::errors::{constants::AUDIO_FILE_EXTENSION, Result, VoiceoverError};
use crate::utils::{audio_basename, remove_bookmarks};

/// Speech service over the vendor API with a content-addressed cache in
/// front of every synthesis call.
///
/// The voice is resolved against the vendor catalog once, at construction,
/// and stays fixed for the lifetime of the service.
pub struct SpeechService {
    api: Box<dyn SpeechApi>,
    settings: ServiceSettings,
    voice: Voice,
    cache: AudioCache,
    consecutive_text_by_id: Mutex<HashMap<String, String>>,
}

impl SpeechService {
    /// Build a service backed by the real vendor client.
    pub async fn connect(
        settings: ServiceSettings,
        api_key: ApiKey,
        cache: AudioCache,
    ) -> Result<Self> {
        Self::new(settings, Box::new(ElevenLabsClient::new(api_key)), cache).await
    }

    /// Build a service over any `SpeechApi` implementation.
    ///
    /// Validates the settings, fetches the voice catalog once and resolves
    /// the configured voice. An empty or unreachable catalog is fatal.
    pub async fn new(
        settings: ServiceSettings,
        api: Box<dyn SpeechApi>,
        cache: AudioCache,
    ) -> Result<Self> {
        settings.validate()?;

        if settings.voice_name.is_none() && settings.voice_id.is_none() {
            warn!("neither voice_name nor voice_id provided, using the default voice");
        }

        let catalog = api.voices().await?;
        if catalog.is_empty() {
            return Err(VoiceoverError::catalog("no voices available"));
        }

        let voice = Self::resolve_voice(&catalog, &settings);
        info!(
            voice_id = %voice.voice_id,
            voice_name = %voice.name,
            model = %settings.model,
            "voice resolved"
        );

        Ok(Self {
            api,
            settings,
            voice,
            cache,
            consecutive_text_by_id: Mutex::new(HashMap::new()),
        })
    }

    fn resolve_voice(catalog: &[Voice], settings: &ServiceSettings) -> Voice {
        if let Some(name) = &settings.voice_name {
            if let Some(voice) = catalog.iter().find(|v| v.name == *name) {
                return voice.clone();
            }
        } else if let Some(id) = &settings.voice_id {
            if let Some(voice) = catalog.iter().find(|v| v.voice_id == *id) {
                return voice.clone();
            }
        }

        warn!(
            fallback = %catalog[0].name,
            "requested voice not found or not provided, defaulting to the first catalog entry"
        );
        catalog[0].clone()
    }

    /// The voice resolved at construction.
    pub fn voice(&self) -> &Voice {
        &self.voice
    }

    pub fn settings(&self) -> &ServiceSettings {
        &self.settings
    }

    pub fn cache_dir(&self) -> &Path {
        self.cache.dir()
    }

    /// Synthesize `text` with the instance defaults.
    pub async fn synthesize(&self, text: &str) -> Result<SpeechMetadata> {
        self.synthesize_with(text, SynthesisOverrides::default()).await
    }

    /// Synthesize `text` with per-request overrides applied over the
    /// instance defaults.
    ///
    /// Checks the cache before calling the vendor; on a hit the stored
    /// metadata is returned unchanged and no network call or file write
    /// happens. On a miss the audio is persisted under the cache directory
    /// and the new entry is stored for future hits.
    #[tracing::instrument(skip(self, text, overrides))]
    pub async fn synthesize_with(
        &self,
        text: &str,
        mut overrides: SynthesisOverrides,
    ) -> Result<SpeechMetadata> {
        let input_text = remove_bookmarks(text);

        if let Some(text_id) = overrides.text_id.clone() {
            self.track_consecutive_text(&text_id, &input_text, &mut overrides);
        }

        let merged = MergedConfig::merge(&self.settings, &self.voice, &overrides);
        let input_data = InputData::new(input_text.clone(), merged.clone());
        let key = CacheKey::from_input(&input_data)?;

        if let Some(cached) = self.cache.lookup(&key)? {
            info!(digest = %key, "cache hit, skipping synthesis");
            return Ok(cached);
        }
        info!(digest = %key, "cache miss, synthesizing");

        let audio_name = overrides.output_name.clone().unwrap_or_else(|| {
            format!(
                "{}.{}",
                audio_basename(&input_text, key.digest()),
                AUDIO_FILE_EXTENSION
            )
        });

        let audio = self.api.convert(merged.to_request(&input_text)).await?;
        self.cache.write_audio(&audio_name, &audio)?;

        let metadata = SpeechMetadata {
            input_text: text.to_string(),
            input_data,
            original_audio: audio_name,
        };
        self.cache.store(&key, &metadata)?;

        Ok(metadata)
    }

    /// Accumulate narration per `text_id` so consecutive requests carry
    /// their preceding text as vendor context.
    fn track_consecutive_text(
        &self,
        text_id: &str,
        input_text: &str,
        overrides: &mut SynthesisOverrides,
    ) {
        let mut tracker = self.consecutive_text_by_id.lock().unwrap();
        match tracker.get_mut(text_id) {
            Some(accumulated) => {
                if overrides.previous_text.is_none() {
                    overrides.previous_text = Some(accumulated.trim_end().to_string());
                }
                *accumulated = format!("{} {}", accumulated.trim_end(), input_text.trim_end());
                accumulated.push(' ');
            }
            None => {
                tracker.insert(text_id.to_string(), format!("{} ", input_text.trim_end()));
            }
        }
    }
}
