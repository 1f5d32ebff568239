use serde::{Deserialize, Serialize};

/// A single entry in the vendor voice catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Voice {
    pub voice_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VoicesResponse {
    pub voices: Vec<Voice>,
}
