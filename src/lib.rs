// Public API for the voiceover-tts library

pub mod cache;
pub mod config;
pub mod errors;
pub mod trace;
pub mod tts;
pub mod utils;

// Re-export commonly used types
pub use cache::cache::AudioCache;
pub use cache::cache_key::CacheKey;
pub use cache::entry::SpeechMetadata;
pub use config::{ApiKey, Config};
pub use errors::{Result, VoiceoverError};
pub use tts::elevenlabs::elevenlabs::ElevenLabsClient;
pub use tts::elevenlabs::structs::voice_settings::VoiceSettings;
pub use tts::params::{ServiceSettings, SynthesisOverrides};
pub use tts::tts::SpeechService;
