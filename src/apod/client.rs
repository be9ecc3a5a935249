// SPDX-License-Identifier: MPL-2.0
//! HTTP transport and APOD endpoint construction.
//!
//! [`ApodTransport`] is the seam between the fetch pipeline and the network:
//! the application uses [`ReqwestTransport`], tests substitute an in-memory
//! fake.

use crate::domain::date_range::{format_date, DateRange};
use crate::error::{Error, FetchError};
use reqwest::Url;
use std::fmt;
use std::future::Future;
use std::time::Duration;

/// Path of the APOD service below the API base URL.
const APOD_PATH: [&str; 2] = ["planetary", "apod"];

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues HTTP GET requests.
pub trait ApodTransport: Send + Sync + 'static {
    fn get(&self, url: Url) -> impl Future<Output = Result<HttpResponse, FetchError>> + Send;
}

// =============================================================================
// ReqwestTransport
// =============================================================================

/// Production transport backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Builds a client whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("ApodGallery/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(Self { client })
    }
}

impl ApodTransport for ReqwestTransport {
    async fn get(&self, url: Url) -> Result<HttpResponse, FetchError> {
        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(map_reqwest_error)?;
        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Network(err.to_string())
    }
}

// =============================================================================
// ApiEndpoint
// =============================================================================

/// Resolved APOD endpoint and credential.
#[derive(Clone)]
pub struct ApiEndpoint {
    apod_url: Url,
    api_key: String,
}

impl ApiEndpoint {
    /// Derives the APOD endpoint from the API base URL (e.g.
    /// `https://api.nasa.gov`).
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self, Error> {
        let mut apod_url = Url::parse(base_url)
            .map_err(|e| Error::Config(format!("invalid API base URL {base_url:?}: {e}")))?;
        apod_url
            .path_segments_mut()
            .map_err(|()| Error::Config(format!("API base URL {base_url:?} cannot hold a path")))?
            .pop_if_empty()
            .extend(APOD_PATH);
        apod_url.set_query(None);

        Ok(Self {
            apod_url,
            api_key: api_key.into(),
        })
    }

    /// Query URL for every record in `range`.
    #[must_use]
    pub fn range_url(&self, range: DateRange) -> Url {
        let mut url = self.apod_url.clone();
        url.query_pairs_mut()
            .append_pair("start_date", &format_date(range.start()))
            .append_pair("end_date", &format_date(range.end()))
            .append_pair("api_key", &self.api_key);
        url
    }

    #[must_use]
    pub fn apod_url(&self) -> &Url {
        &self.apod_url
    }
}

impl fmt::Debug for ApiEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiEndpoint")
            .field("apod_url", &self.apod_url.as_str())
            .field("api_key", &"<redacted>")
            .finish()
    }
}
