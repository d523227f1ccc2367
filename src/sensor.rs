use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use crate::config::LocationQuery;
use crate::models::alert::AlertSet;

const INTEGRATION: &str = "weatheralerts";
const ATTRIBUTION: &str = "Data provided by Weather.gov";
const DEFAULT_ICON: &str = "mdi:alert";

/// Sensor-style view over the most recent fetch cycle: a numeric state
/// (alert count), a structured attribute bag, and an availability flag.
///
/// A failed cycle only flips availability; the previous attribute data stays
/// in place so the host can keep serving the last known state.
#[derive(Debug)]
pub struct AlertSensor {
    name: String,
    entry_id: String,
    icon: &'static str,
    current: Option<AlertSet>,
    available: bool,
    last_success: Option<DateTime<Utc>>,
}

impl AlertSensor {
    pub fn new(name: &str, location: &LocationQuery) -> Self {
        Self {
            name: name.to_string(),
            entry_id: slugify(location.id()),
            icon: DEFAULT_ICON,
            current: None,
            available: false,
            last_success: None,
        }
    }

    pub fn unique_id(&self) -> String {
        format!("{}_{}", slugify(&self.name), self.entry_id)
    }

    pub fn unit_of_measurement(&self) -> &'static str {
        "Alerts"
    }

    pub fn icon(&self) -> &'static str {
        self.icon
    }

    /// Alert count of the last successful cycle, or `None` while unavailable.
    pub fn state(&self) -> Option<usize> {
        if self.available {
            self.current.as_ref().map(AlertSet::count)
        } else {
            None
        }
    }

    pub fn available(&self) -> bool {
        self.available
    }

    pub fn last_success(&self) -> Option<DateTime<Utc>> {
        self.last_success
    }

    pub fn apply(&mut self, set: AlertSet) {
        self.current = Some(set);
        self.available = true;
        self.last_success = Some(Utc::now());
    }

    pub fn mark_unavailable(&mut self) {
        self.available = false;
    }

    pub fn attributes(&self) -> Value {
        match &self.current {
            Some(set) => json!({
                "alerts": set.alerts,
                "integration": INTEGRATION,
                "zone": set.zoneid,
                "attribution": ATTRIBUTION,
            }),
            None => json!({}),
        }
    }
}

fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut last_was_separator = true;
    for ch in input.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch);
            last_was_separator = false;
        } else if !last_was_separator {
            slug.push('_');
            last_was_separator = true;
        }
    }
    slug.trim_end_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::alert::{AlertRecord, MISSING};

    fn zone_sensor() -> AlertSensor {
        AlertSensor::new("NWS Alerts", &LocationQuery::Zone("PAC049".to_string()))
    }

    fn one_alert_set() -> AlertSet {
        let mut set = AlertSet::empty("PAC049");
        set.alerts.push(AlertRecord {
            area: "Mercer, PA".to_string(),
            certainty: MISSING.to_string(),
            description: MISSING.to_string(),
            ends: MISSING.to_string(),
            event: "Flood Warning".to_string(),
            instruction: MISSING.to_string(),
            response: MISSING.to_string(),
            sent: MISSING.to_string(),
            severity: MISSING.to_string(),
            title: "Flood Warning".to_string(),
            urgency: MISSING.to_string(),
            nws_headline: MISSING.to_string(),
            hail_size: MISSING.to_string(),
            wind_gust: MISSING.to_string(),
            waterspout_detection: MISSING.to_string(),
            effective: MISSING.to_string(),
            expires: MISSING.to_string(),
            ends_expires: MISSING.to_string(),
            onset: MISSING.to_string(),
            status: MISSING.to_string(),
            message_type: MISSING.to_string(),
            category: MISSING.to_string(),
            sender: MISSING.to_string(),
            sender_name: MISSING.to_string(),
            id: "urn:a1".to_string(),
            zoneid: "PAC049".to_string(),
        });
        set
    }

    #[test]
    fn slugify_flattens_identifiers() {
        assert_eq!(slugify("PAC049"), "pac049");
        assert_eq!(slugify("38.9,-77.0"), "38_9_77_0");
        assert_eq!(slugify("NWS Alerts"), "nws_alerts");
    }

    #[test]
    fn unique_id_combines_name_and_location() {
        assert_eq!(zone_sensor().unique_id(), "nws_alerts_pac049");
    }

    #[test]
    fn exposes_static_sensor_metadata() {
        let sensor = zone_sensor();
        assert_eq!(sensor.unit_of_measurement(), "Alerts");
        assert_eq!(sensor.icon(), "mdi:alert");
    }

    #[test]
    fn starts_unavailable_with_empty_attributes() {
        let sensor = zone_sensor();
        assert!(!sensor.available());
        assert_eq!(sensor.state(), None);
        assert_eq!(sensor.attributes(), json!({}));
        assert_eq!(sensor.last_success(), None);
    }

    #[test]
    fn apply_updates_state_and_attributes() {
        let mut sensor = zone_sensor();
        sensor.apply(one_alert_set());

        assert!(sensor.available());
        assert_eq!(sensor.state(), Some(1));
        assert!(sensor.last_success().is_some());

        let attributes = sensor.attributes();
        assert_eq!(attributes["integration"], "weatheralerts");
        assert_eq!(attributes["zone"], "PAC049");
        assert_eq!(attributes["alerts"][0]["event"], "Flood Warning");
    }

    #[test]
    fn failure_keeps_previous_attributes() {
        let mut sensor = zone_sensor();
        sensor.apply(one_alert_set());
        sensor.mark_unavailable();

        assert!(!sensor.available());
        assert_eq!(sensor.state(), None);
        // Stale data stays for the host to decide what to do with.
        assert_eq!(sensor.attributes()["alerts"][0]["id"], "urn:a1");
    }
}
