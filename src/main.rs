mod config;
mod error;
mod fetcher;
mod models;
mod poller;
mod processor;
mod sensor;

use config::AppConfig;
use fetcher::NwsClient;
use sensor::AlertSensor;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load config
    let config = AppConfig::load()?;

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(&config.log_level)
        .init();

    info!("Starting NWS Alerts Service...");

    let fetcher = NwsClient::new(&config.api_url)?;
    let mut sensor = AlertSensor::new(&config.name, &config.location);
    info!(
        "Watching active alerts for {} as {} (unit: {}, icon: {})",
        config.location.id(),
        sensor.unique_id(),
        sensor.unit_of_measurement(),
        sensor.icon()
    );

    poller::run(&config, &fetcher, &mut sensor).await;

    Ok(())
}
