use anyhow::{bail, Result};
use dotenvy::dotenv;
use std::env;

use crate::fetcher::DEFAULT_API_URL;

pub const DEFAULT_NAME: &str = "NWS Alerts";
pub const DEFAULT_INTERVAL: u64 = 60;
pub const DEFAULT_TIMEOUT: u64 = 10;

/// The geographic target of the alert queries. Exactly one variant is
/// configured per service instance.
///
/// Tracker resolution happens upstream of this service; the `Tracker`
/// variant already carries the resolved `lat,lon` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationQuery {
    Zone(String),
    GpsPoint(String),
    Tracker(String),
}

impl LocationQuery {
    pub fn from_options(
        zone_id: Option<String>,
        gps_loc: Option<String>,
        tracker: Option<String>,
    ) -> Result<Self> {
        match (zone_id, gps_loc, tracker) {
            (Some(zone), None, None) => Ok(Self::Zone(zone)),
            (None, Some(point), None) => Ok(Self::GpsPoint(point)),
            (None, None, Some(point)) => Ok(Self::Tracker(point)),
            (None, None, None) => {
                bail!("Zone, GPS location or device tracker needs to be configured.")
            }
            _ => bail!("Only one of zone, GPS location or device tracker may be configured."),
        }
    }

    /// The identifier interpolated into the alerts URL and stamped on every
    /// record of a fetch cycle.
    pub fn id(&self) -> &str {
        match self {
            Self::Zone(id) | Self::GpsPoint(id) | Self::Tracker(id) => id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub location: LocationQuery,
    pub name: String,
    pub interval_secs: u64,
    pub timeout_secs: u64,
    pub api_url: String,
    pub log_level: String,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        dotenv().ok();

        let location =
            LocationQuery::from_options(read_var("ZONE_ID"), read_var("GPS_LOC"), read_var("TRACKER"))?;

        let name = env::var("NAME").unwrap_or_else(|_| DEFAULT_NAME.to_string());
        let interval_secs = env::var("INTERVAL")
            .unwrap_or_else(|_| DEFAULT_INTERVAL.to_string())
            .parse()
            .unwrap_or(DEFAULT_INTERVAL);
        let timeout_secs = env::var("TIMEOUT")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT.to_string())
            .parse()
            .unwrap_or(DEFAULT_TIMEOUT);
        let api_url = env::var("API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            location,
            name,
            interval_secs,
            timeout_secs,
            api_url,
            log_level,
        })
    }
}

fn read_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
