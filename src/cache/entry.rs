use serde::{Deserialize, Serialize};

use crate::tts::params::InputData;

/// The record stored per cache key and returned on every hit.
///
/// `input_text` keeps the author's original text, bookmarks included;
/// `input_data` holds the stripped text and merged parameters the audio was
/// synthesized with; `original_audio` is the audio file name relative to
/// the cache directory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpeechMetadata {
    pub input_text: String,
    pub input_data: InputData,
    pub original_audio: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tts::elevenlabs::structs::voice::Voice;
    use crate::tts::params::{MergedConfig, ServiceSettings, SynthesisOverrides};

    #[test]
    fn test_metadata_json_schema() {
        let voice = Voice {
            voice_id: "v-1".to_string(),
            name: "Rachel".to_string(),
            category: None,
        };
        let merged = MergedConfig::merge(
            &ServiceSettings::default(),
            &voice,
            &SynthesisOverrides::default(),
        );
        let metadata = SpeechMetadata {
            input_text: "Hello <bookmark mark='a'/>world".to_string(),
            input_data: InputData::new("Hello world", merged),
            original_audio: "hello-world-0123456789abcdef.mp3".to_string(),
        };

        let json = serde_json::to_value(&metadata).unwrap();
        assert!(json.get("input_text").is_some());
        assert!(json.get("input_data").is_some());
        assert!(json.get("original_audio").is_some());
        assert_eq!(json["input_data"]["service"], "elevenlabs");
        assert_eq!(json["input_data"]["input_text"], "Hello world");

        let back: SpeechMetadata = serde_json::from_value(json).unwrap();
        assert_eq!(back, metadata);
    }
}
