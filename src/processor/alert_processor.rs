use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

use crate::error::FetchError;
use crate::models::alert::{AlertRecord, AlertSet, MISSING};
use crate::models::feed::{AlertFeed, AlertProperties};

/// Decodes one alerts-feed payload into the sorted record set for `zoneid`.
///
/// A feed without a `features` array counts as zero alerts. A payload that
/// is not valid JSON surfaces as `MalformedResponse` and is downgraded by
/// the fetcher.
pub fn process_feed(zoneid: &str, payload: &[u8]) -> Result<AlertSet, FetchError> {
    // 1. Parse JSON
    let feed: AlertFeed = serde_json::from_slice(payload)?;

    // 2. Flatten features; a feature without properties carries nothing usable
    let mut alerts: Vec<AlertRecord> = feed
        .features
        .unwrap_or_default()
        .into_iter()
        .filter_map(|feature| feature.properties)
        .map(|properties| normalize(properties, zoneid))
        .collect();

    // 3. Highest id first; sort_by is stable, so duplicate ids keep source order
    alerts.sort_by(|a, b| b.id.cmp(&a.id));

    for sorted_alert in &alerts {
        debug!("[{}] Sorted alert ID: {}", zoneid, sorted_alert.id);
    }

    Ok(AlertSet::new(zoneid, alerts))
}

fn normalize(properties: AlertProperties, zoneid: &str) -> AlertRecord {
    let AlertProperties {
        id,
        area_desc,
        certainty,
        description,
        ends,
        event,
        instruction,
        response,
        sent,
        severity,
        headline,
        urgency,
        effective,
        expires,
        onset,
        status,
        message_type,
        category,
        sender,
        sender_name,
        parameters,
    } = properties;

    // When the feed leaves `ends` empty, `expires` is the next best answer
    // for when the alert stops mattering.
    let ends_expires = ends
        .clone()
        .or_else(|| expires.clone())
        .unwrap_or_else(|| MISSING.to_string());

    let title = match headline.as_deref() {
        Some(headline) => match headline.split_once(" by ") {
            Some((title, _)) => title.to_string(),
            None => headline.to_string(),
        },
        None => MISSING.to_string(),
    };

    let parameters = parameters.unwrap_or_default();

    AlertRecord {
        area: text(area_desc),
        certainty: text(certainty),
        description: text(description),
        ends: text(ends),
        event: text(event),
        instruction: text(instruction),
        response: text(response),
        sent: text(sent),
        severity: text(severity),
        title,
        urgency: text(urgency),
        nws_headline: parameter_text(&parameters, "NWSheadline"),
        hail_size: parameter_text(&parameters, "hailSize"),
        wind_gust: parameter_text(&parameters, "windGust"),
        waterspout_detection: parameter_text(&parameters, "waterspoutDetection"),
        effective: text(effective),
        expires: text(expires),
        ends_expires,
        onset: text(onset),
        status: text(status),
        message_type: text(message_type),
        category: text(category),
        sender: text(sender),
        sender_name: text(sender_name),
        id: text(id),
        zoneid: zoneid.to_string(),
    }
}

fn text(value: Option<String>) -> String {
    value.unwrap_or_else(|| MISSING.to_string())
}

/// Parameter values come as strings, numbers, or arrays of either; flatten
/// them into the plain text the attribute schema expects.
fn parameter_text(parameters: &HashMap<String, Value>, key: &str) -> String {
    match parameters.get(key) {
        None | Some(Value::Null) => MISSING.to_string(),
        Some(value) => flatten_value(value),
    }
}

fn flatten_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(flatten_value)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}
