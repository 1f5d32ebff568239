use serde::{Deserialize, Serialize};

/// Text normalization mode for the vendor request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextNormalization {
    Auto,
    On,
    Off,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_as_lowercase() {
        assert_eq!(
            serde_json::to_string(&TextNormalization::Auto).unwrap(),
            r#""auto""#
        );
        assert_eq!(
            serde_json::to_string(&TextNormalization::Off).unwrap(),
            r#""off""#
        );
    }

    #[test]
    fn test_deserialization() {
        let mode: TextNormalization = serde_json::from_str(r#""on""#).unwrap();
        assert_eq!(mode, TextNormalization::On);
    }
}
