use serde::Serialize;

use super::{normalization::TextNormalization, voice_settings::VoiceSettings};

/// One fully resolved text-to-speech call.
///
/// The voice id addresses the endpoint, `output_format` and the two flags
/// travel as query parameters, and `body` is the JSON payload.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SynthesisRequest {
    pub voice_id: String,
    pub output_format: String,
    pub enable_logging: Option<bool>,
    pub optimize_streaming_latency: Option<u8>,
    pub body: TextToSpeechBody,
}

/// JSON body of the text-to-speech call. Unset fields are omitted on the
/// wire, the vendor expects absent rather than null.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextToSpeechBody {
    pub text: String,
    pub model_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_settings: Option<VoiceSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_request_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_request_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_text_normalization: Option<TextNormalization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_language_text_normalization: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_body() -> TextToSpeechBody {
        TextToSpeechBody {
            text: "Hello".to_string(),
            model_id: "eleven_multilingual_v2".to_string(),
            voice_settings: None,
            language_code: None,
            seed: None,
            previous_text: None,
            next_text: None,
            previous_request_ids: None,
            next_request_ids: None,
            apply_text_normalization: None,
            apply_language_text_normalization: None,
        }
    }

    #[test]
    fn test_minimal_body_omits_unset_fields() {
        let json = serde_json::to_string(&minimal_body()).unwrap();
        assert_eq!(json, r#"{"text":"Hello","model_id":"eleven_multilingual_v2"}"#);
    }

    #[test]
    fn test_set_fields_are_serialized() {
        let body = TextToSpeechBody {
            seed: Some(42),
            previous_text: Some("Earlier line.".to_string()),
            previous_request_ids: Some(vec!["req-1".to_string()]),
            apply_text_normalization: Some(TextNormalization::On),
            apply_language_text_normalization: Some(false),
            ..minimal_body()
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["seed"], 42);
        assert_eq!(json["previous_text"], "Earlier line.");
        assert_eq!(json["previous_request_ids"][0], "req-1");
        assert_eq!(json["apply_text_normalization"], "on");
        assert_eq!(json["apply_language_text_normalization"], false);
        assert!(json.get("next_text").is_none());
    }
}
