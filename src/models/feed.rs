use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// GeoJSON-style document returned by the active-alerts endpoint. Anything
/// beyond `features` is ignored; a feed without the key decodes to `None`.
#[derive(Debug, Deserialize)]
pub struct AlertFeed {
    pub features: Option<Vec<Feature>>,
}

#[derive(Debug, Deserialize)]
pub struct Feature {
    pub properties: Option<AlertProperties>,
}

/// The per-alert payload. All fields are optional on the wire; JSON null and
/// a missing key are treated the same.
#[derive(Debug, Deserialize)]
pub struct AlertProperties {
    pub id: Option<String>,
    #[serde(rename = "areaDesc")]
    pub area_desc: Option<String>,
    pub certainty: Option<String>,
    pub description: Option<String>,
    pub ends: Option<String>,
    pub event: Option<String>,
    pub instruction: Option<String>,
    pub response: Option<String>,
    pub sent: Option<String>,
    pub severity: Option<String>,
    pub headline: Option<String>,
    pub urgency: Option<String>,
    pub effective: Option<String>,
    pub expires: Option<String>,
    pub onset: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "messageType")]
    pub message_type: Option<String>,
    pub category: Option<String>,
    pub sender: Option<String>,
    #[serde(rename = "senderName")]
    pub sender_name: Option<String>,
    // Parameter values arrive wrapped in arrays and are not always strings,
    // so they stay as raw JSON until normalization.
    pub parameters: Option<HashMap<String, Value>>,
}
