use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::warn;

use crate::config::LocationQuery;
use crate::error::FetchError;
use crate::models::alert::AlertSet;
use crate::processor::alert_processor;

// ---------------------------------------------------------
// API Documentation
// ---------------------------------------------------------
// https://www.weather.gov/documentation/services-web-api
// ---------------------------------------------------------

pub const DEFAULT_API_URL: &str = "https://api.weather.gov";

// api.weather.gov rejects requests without a User-Agent.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// One-shot fetch of the active alerts for a location. Stateless per call;
/// retry and scheduling belong to whoever drives the refresh cycle.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(
        &self,
        query: &LocationQuery,
        timeout: Duration,
    ) -> Result<AlertSet, FetchError>;
}

/// `Fetcher` backed by the public weather.gov alerts endpoint.
pub struct NwsClient {
    client: reqwest::Client,
    base_url: String,
}

impl NwsClient {
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn alerts_url(&self, query: &LocationQuery) -> String {
        match query {
            LocationQuery::Zone(id) => format!("{}/alerts/active?zone={}", self.base_url, id),
            LocationQuery::GpsPoint(point) | LocationQuery::Tracker(point) => {
                format!("{}/alerts/active?point={}", self.base_url, point)
            }
        }
    }
}

#[async_trait]
impl Fetcher for NwsClient {
    async fn fetch(
        &self,
        query: &LocationQuery,
        timeout: Duration,
    ) -> Result<AlertSet, FetchError> {
        let url = self.alerts_url(query);
        let response = self
            .client
            .get(&url)
            .timeout(timeout)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(
                "[{}] Possible API outage. Currently unable to download from weather.gov - HTTP status code {}",
                query.id(),
                status.as_u16()
            );
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let body = response.bytes().await.map_err(classify)?;
        match alert_processor::process_feed(query.id(), &body) {
            Ok(set) => Ok(set),
            // A 200 with an undecodable body counts as zero alerts, not a
            // failed cycle.
            Err(FetchError::MalformedResponse(err)) => {
                warn!("[{}] Discarding malformed alert feed: {}", query.id(), err);
                Ok(AlertSet::empty(query.id()))
            }
            Err(other) => Err(other),
        }
    }
}

fn classify(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Transport(err)
    }
}
