use std::env;
use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;

use crate::errors::{constants::API_KEY_ENV_VAR, Result, VoiceoverError};

/// Settings for the demo binary, read from a TOML file when present and
/// from `VOICEOVER_*` environment variables otherwise.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    pub api_key: Option<String>,
    pub cache_dir: Option<PathBuf>,
    pub voice_name: Option<String>,
    pub voice_id: Option<String>,
    pub model: Option<String>,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(raw) => Ok(toml::from_str(&raw)?),
            Err(_) => Ok(Self::from_env()),
        }
    }

    fn from_env() -> Self {
        Self {
            api_key: None,
            cache_dir: env::var("VOICEOVER_CACHE_DIR").ok().map(PathBuf::from),
            voice_name: env::var("VOICEOVER_VOICE_NAME").ok(),
            voice_id: env::var("VOICEOVER_VOICE_ID").ok(),
            model: env::var("VOICEOVER_MODEL").ok(),
        }
    }
}

/// Vendor API credential, injected explicitly instead of read ambiently at
/// call sites. Absence is a typed error so callers decide remediation.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Source the credential from a local `.env` file, then the process
    /// environment.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        env::var(API_KEY_ENV_VAR)
            .map(Self)
            .map_err(|_| VoiceoverError::missing_credential(API_KEY_ENV_VAR))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}
