pub mod elevenlabs;
pub mod structs;

use async_trait::async_trait;
use bytes::Bytes;

use crate::errors::Result;
use self::structs::{synthesize_request::SynthesisRequest, voice::Voice};

/// Vendor seam for voice listing and synthesis.
///
/// The service talks to the vendor only through this trait, so tests can
/// stub the network and assert call counts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpeechApi: Send + Sync {
    /// Fetch the full voice catalog.
    async fn voices(&self) -> Result<Vec<Voice>>;

    /// Convert text to speech, returning the raw audio bytes.
    async fn convert(&self, request: SynthesisRequest) -> Result<Bytes>;
}
