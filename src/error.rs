use thiserror::Error;

/// Failure modes of one alert-fetch cycle.
///
/// Every network and HTTP failure is reported through this type; nothing in
/// the fetch path panics or leaks a raw error to the caller. A malformed 200
/// body is classified here by the decoder but downgraded to an empty result
/// by the fetcher.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request exceeded the configured per-request bound.
    #[error("request timed out")]
    Timeout,

    /// The alerts endpoint answered with something other than 200.
    #[error("unexpected HTTP status {0}")]
    HttpStatus(u16),

    /// DNS, connection, or body-read failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not a decodable alert feed.
    #[error("malformed alert feed: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}
