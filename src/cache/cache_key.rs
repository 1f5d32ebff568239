use std::fmt;

use sha2::{Digest, Sha256};

use crate::errors::{constants::CACHE_DIGEST_LEN, Result};
use crate::tts::params::InputData;

/// Content-addressed key over the merged request parameters and input text.
///
/// Identical merged parameters and text always produce the same key; the
/// digest doubles as the audio file stem suffix.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    digest: String,
}

impl CacheKey {
    pub fn from_input(input: &InputData) -> Result<Self> {
        let canonical = serde_json::to_string(input)?;
        let digest = hex::encode(Sha256::digest(canonical.as_bytes()));
        Ok(Self {
            digest: digest[..CACHE_DIGEST_LEN].to_string(),
        })
    }

    pub fn digest(&self) -> &str {
        &self.digest
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digest)
    }
}
