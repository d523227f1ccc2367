use serde::Serialize;

/// Literal placeholder substituted for any field the feed does not carry.
/// Downstream consumers pattern-match on the string "null", so this must
/// stay distinct from an empty string.
pub const MISSING: &str = "null";

/// One decoded alert, flattened from a single feed feature.
///
/// Every field is text; serialization keys match the attribute names the
/// upstream properties object uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertRecord {
    pub area: String,
    pub certainty: String,
    pub description: String,
    pub ends: String,
    pub event: String,
    pub instruction: String,
    pub response: String,
    pub sent: String,
    pub severity: String,
    pub title: String,
    pub urgency: String,
    #[serde(rename = "NWSheadline")]
    pub nws_headline: String,
    #[serde(rename = "hailSize")]
    pub hail_size: String,
    #[serde(rename = "windGust")]
    pub wind_gust: String,
    #[serde(rename = "waterspoutDetection")]
    pub waterspout_detection: String,
    pub effective: String,
    pub expires: String,
    #[serde(rename = "endsExpires")]
    pub ends_expires: String,
    pub onset: String,
    pub status: String,
    #[serde(rename = "messageType")]
    pub message_type: String,
    pub category: String,
    pub sender: String,
    #[serde(rename = "senderName")]
    pub sender_name: String,
    pub id: String,
    pub zoneid: String,
}

/// The outcome of one fetch cycle: the sorted records for one location.
/// Rebuilt from scratch every cycle; never merged with a previous set.
#[derive(Debug, Clone, Serialize)]
pub struct AlertSet {
    pub zoneid: String,
    pub alerts: Vec<AlertRecord>,
}

impl AlertSet {
    pub fn new(zoneid: impl Into<String>, alerts: Vec<AlertRecord>) -> Self {
        Self {
            zoneid: zoneid.into(),
            alerts,
        }
    }

    pub fn empty(zoneid: impl Into<String>) -> Self {
        Self::new(zoneid, Vec::new())
    }

    pub fn count(&self) -> usize {
        self.alerts.len()
    }
}
