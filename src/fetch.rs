//! Concurrent fetching of the upstream sources.
//!
//! All requests are issued at once and joined when every one has settled
//! (fan-out/fan-in). Each endpoint gets its own slot in the output, in
//! input order, holding either the parsed JSON body or a typed error —
//! the aggregate itself never fails, so one broken upstream cannot take
//! the other dataset down with it.

use futures_util::future::join_all;
use serde_json::Value;

use crate::datasets::Endpoint;
use crate::error::FetchError;

/// Outcome of fetching one endpoint.
pub type DatasetResult = Result<Value, FetchError>;

/// HTTP client wrapper for the upstream sources.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    /// Build a fetcher with its own client.
    ///
    /// # Errors
    ///
    /// Returns the underlying client builder error (TLS backend setup).
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("dualist/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// Fetch every endpoint concurrently and join once all have settled.
    ///
    /// The output has one slot per endpoint, in input order. Failures are
    /// logged here and returned as typed per-slot errors.
    pub async fn fetch_all(&self, endpoints: &[Endpoint]) -> Vec<DatasetResult> {
        let results = join_all(endpoints.iter().map(|e| self.fetch_one(e))).await;

        for (endpoint, result) in endpoints.iter().zip(&results) {
            if let Err(err) = result {
                eprintln!("fetch failed for {}: {}", endpoint.label, err);
            }
        }

        results
    }

    /// Fetch a single endpoint: GET, check status, parse JSON.
    pub async fn fetch_one(&self, endpoint: &Endpoint) -> DatasetResult {
        let url = endpoint.url.clone();

        let response =
            self.client
                .get(url.clone())
                .send()
                .await
                .map_err(|source| FetchError::Request {
                    url: url.to_string(),
                    source,
                })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|source| FetchError::Decode {
                url: url.to_string(),
                source,
            })
    }
}
