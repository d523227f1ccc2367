use std::time::Duration;

use tracing::{info, warn};

use crate::config::{AppConfig, LocationQuery};
use crate::fetcher::Fetcher;
use crate::sensor::AlertSensor;

/// Drives the refresh cycle: one fetch per interval, forever. Failed cycles
/// are absorbed here; the loop never exits because of one.
pub async fn run(config: &AppConfig, fetcher: &dyn Fetcher, sensor: &mut AlertSensor) {
    let interval = Duration::from_secs(config.interval_secs);
    let timeout = Duration::from_secs(config.timeout_secs);

    loop {
        poll_once(fetcher, &config.location, timeout, sensor).await;
        tokio::time::sleep(interval).await;
    }
}

pub async fn poll_once(
    fetcher: &dyn Fetcher,
    location: &LocationQuery,
    timeout: Duration,
    sensor: &mut AlertSensor,
) {
    let feedid = location.id();

    match fetcher.fetch(location, timeout).await {
        Ok(set) => {
            if !sensor.available() {
                info!("[{}] Update of the sensor completed", feedid);
            }
            info!("[{}] {} active alerts", feedid, set.count());
            sensor.apply(set);
        }
        Err(err) => {
            if sensor.available() {
                warn!("[{}] Could not update the sensor ({})", feedid, err);
            } else if let Some(last) = sensor.last_success() {
                warn!(
                    "[{}] Still no update ({}); last successful update at {}",
                    feedid,
                    err,
                    last.to_rfc3339()
                );
            } else {
                warn!("[{}] Still no update ({})", feedid, err);
            }
            sensor.mark_unavailable();
        }
    }
}
