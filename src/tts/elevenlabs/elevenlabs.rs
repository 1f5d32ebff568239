use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client as HttpClient;
use tracing::debug;

use super::structs::{
    api_error::ApiErrorResponse, synthesize_request::SynthesisRequest, voice::Voice,
    voice::VoicesResponse,
};
use super::SpeechApi;
use crate::config::ApiKey;
use crate::errors::{Result, VoiceoverError};

const API_URL: &str = "https://api.elevenlabs.io/v1";
const API_KEY_HEADER: &str = "xi-api-key";

/// HTTP client for the ElevenLabs API.
#[derive(Clone, Debug)]
pub struct ElevenLabsClient {
    api_key: ApiKey,
    http_client: HttpClient,
    base_url: String,
}

impl ElevenLabsClient {
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            http_client: HttpClient::new(),
            base_url: API_URL.to_string(),
        }
    }
}

#[async_trait]
impl SpeechApi for ElevenLabsClient {
    #[tracing::instrument(skip(self))]
    async fn voices(&self) -> Result<Vec<Voice>> {
        let response = self
            .http_client
            .get(format!("{}/voices", self.base_url))
            .header(API_KEY_HEADER, self.api_key.as_str())
            .send()
            .await
            .map_err(|e| VoiceoverError::catalog(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VoiceoverError::catalog(format!(
                "voice listing returned {}: {}",
                status, body
            )));
        }

        let parsed: VoicesResponse = response
            .json()
            .await
            .map_err(|e| VoiceoverError::catalog(e.to_string()))?;
        debug!(count = parsed.voices.len(), "fetched voice catalog");
        Ok(parsed.voices)
    }

    #[tracing::instrument(skip(self, request), fields(voice_id = %request.voice_id))]
    async fn convert(&self, request: SynthesisRequest) -> Result<Bytes> {
        let mut query: Vec<(&str, String)> =
            vec![("output_format", request.output_format.clone())];
        if let Some(enable_logging) = request.enable_logging {
            query.push(("enable_logging", enable_logging.to_string()));
        }
        if let Some(latency) = request.optimize_streaming_latency {
            query.push(("optimize_streaming_latency", latency.to_string()));
        }

        let response = self
            .http_client
            .post(format!(
                "{}/text-to-speech/{}",
                self.base_url, request.voice_id
            ))
            .header(API_KEY_HEADER, self.api_key.as_str())
            .query(&query)
            .json(&request.body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .map(|e| e.message())
                .unwrap_or(body);
            return Err(VoiceoverError::synthesis(format!(
                "vendor returned {}: {}",
                status, message
            )));
        }

        let audio = response.bytes().await?;
        debug!(bytes = audio.len(), "received audio");
        Ok(audio)
    }
}
