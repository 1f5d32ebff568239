/// Custom error types for the voiceover-tts library
#[derive(Debug, thiserror::Error)]
pub enum VoiceoverError {
    #[error("Missing credential: environment variable {0} is not set")]
    MissingCredential(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Voice catalog error: {0}")]
    VoiceCatalog(String),

    #[error("Language code {language_code} is not supported for model {model}")]
    UnsupportedLanguage { language_code: String, model: String },

    #[error("Speech synthesis failed: {0}")]
    Synthesis(String),

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl VoiceoverError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn catalog(message: impl Into<String>) -> Self {
        Self::VoiceCatalog(message.into())
    }

    pub fn synthesis(message: impl Into<String>) -> Self {
        Self::Synthesis(message.into())
    }

    pub fn cache(message: impl Into<String>) -> Self {
        Self::Cache(message.into())
    }

    pub fn missing_credential(var_name: &str) -> Self {
        Self::MissingCredential(var_name.to_string())
    }

    pub fn unsupported_language(language_code: &str, model: &str) -> Self {
        Self::UnsupportedLanguage {
            language_code: language_code.to_string(),
            model: model.to_string(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, VoiceoverError>;

/// Constants used throughout the library
pub mod constants {
    // Configuration constants
    pub const DEFAULT_CONFIG_PATH: &str = "voiceover.toml";
    pub const API_KEY_ENV_VAR: &str = "ELEVEN_API_KEY";

    // Vendor constants
    pub const SERVICE_NAME: &str = "elevenlabs";
    pub const DEFAULT_MODEL: &str = "eleven_multilingual_v2";
    pub const DEFAULT_OUTPUT_FORMAT: &str = "mp3_44100_128";
    pub const MAX_LATENCY_OPTIMIZATION: u8 = 4;

    /// Models that accept a `language_code` for language enforcement.
    pub const LANGUAGE_CODE_MODELS: [&str; 2] = ["eleven_turbo_v2_5", "eleven_flash_v2_5"];

    // Cache constants
    pub const DEFAULT_CACHE_DIR: &str = "./media/voiceovers";
    pub const MEMO_CACHE_SIZE: usize = 256;
    pub const CACHE_DIGEST_LEN: usize = 16;
    pub const AUDIO_SLUG_MAX_LEN: usize = 40;
    pub const AUDIO_FILE_EXTENSION: &str = "mp3";
}
