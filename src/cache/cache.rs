use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use lru::LruCache;
use tracing::{debug, warn};

use super::cache_key::CacheKey;
use super::entry::SpeechMetadata;
use crate::errors::{constants::MEMO_CACHE_SIZE, Result, VoiceoverError};

/// Directory-backed cache collaborator.
///
/// One `<digest>.json` metadata file per key, audio blobs alongside. An
/// in-process LRU memo fronts the disk reads. Writes go through a
/// temporary file and an atomic rename, so a concurrent writer can never
/// leave a torn entry; when two writers race on the same key, the last
/// rename wins and both files carry identical content.
#[derive(Debug)]
pub struct AudioCache {
    dir: PathBuf,
    memo: Mutex<LruCache<String, SpeechMetadata>>,
}

impl AudioCache {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            memo: Mutex::new(LruCache::new(NonZeroUsize::new(MEMO_CACHE_SIZE).unwrap())),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, key: &CacheKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.digest()))
    }

    /// Look up a previously stored entry.
    ///
    /// Corrupt metadata and entries whose audio file has gone missing
    /// degrade to a miss with a warning instead of failing the request.
    #[tracing::instrument(skip(self), fields(digest = %key))]
    pub fn lookup(&self, key: &CacheKey) -> Result<Option<SpeechMetadata>> {
        let memoized = {
            let mut memo = self.memo.lock().unwrap();
            memo.get(key.digest()).cloned()
        };
        if let Some(metadata) = memoized {
            if self.audio_exists(&metadata) {
                debug!("memo hit");
                return Ok(Some(metadata));
            }
        }

        let path = self.entry_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&path)?;
        let metadata: SpeechMetadata = match serde_json::from_str(&raw) {
            Ok(metadata) => metadata,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "corrupt cache entry, treating as miss");
                return Ok(None);
            }
        };

        if !self.audio_exists(&metadata) {
            warn!(
                audio = %metadata.original_audio,
                "cache entry points at missing audio, treating as miss"
            );
            return Ok(None);
        }

        let mut memo = self.memo.lock().unwrap();
        memo.put(key.digest().to_string(), metadata.clone());
        Ok(Some(metadata))
    }

    /// Store the metadata entry for a key.
    #[tracing::instrument(skip(self, metadata), fields(digest = %key))]
    pub fn store(&self, key: &CacheKey, metadata: &SpeechMetadata) -> Result<()> {
        let serialized = serde_json::to_string_pretty(metadata)?;
        self.write_atomic(&self.entry_path(key), serialized.as_bytes())?;

        let mut memo = self.memo.lock().unwrap();
        memo.put(key.digest().to_string(), metadata.clone());
        Ok(())
    }

    /// Persist audio bytes under the cache directory, returning the full
    /// path of the written file.
    pub fn write_audio(&self, name: &str, audio: &[u8]) -> Result<PathBuf> {
        if name.contains(std::path::MAIN_SEPARATOR) || name.contains('/') {
            return Err(VoiceoverError::cache(format!(
                "audio file name must not contain path separators: {}",
                name
            )));
        }
        let path = self.dir.join(name);
        self.write_atomic(&path, audio)?;
        Ok(path)
    }

    fn write_atomic(&self, path: &Path, contents: &[u8]) -> Result<()> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| VoiceoverError::cache("invalid cache file name"))?;
        let tmp = self.dir.join(format!(".{}.tmp", file_name));
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    fn audio_exists(&self, metadata: &SpeechMetadata) -> bool {
        self.dir.join(&metadata.original_audio).exists()
    }
}
