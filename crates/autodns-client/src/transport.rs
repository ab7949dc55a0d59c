//! HTTPS transport for request documents.

use async_trait::async_trait;
use autodns_core::{AutoDnsError, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client as HttpClient;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use url::Url;

/// Sends one serialized request document and returns the full reply body.
///
/// Implementations must not interpret the body; classification happens in
/// the response interpreter.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `document` and buffer the complete response body
    async fn send(&self, document: String) -> Result<String>;
}

/// Transport that POSTs to the gateway over HTTPS.
pub struct HttpsTransport {
    http: HttpClient,
    url: Url,
}

impl HttpsTransport {
    /// Create a transport for the given gateway URL
    pub fn new(base_url: &str, timeout: Option<Duration>, user_agent: &str) -> Result<Self> {
        let url = Url::parse(base_url)
            .map_err(|e| AutoDnsError::InvalidUrl(format!("{base_url}: {e}")))?;

        let mut builder = HttpClient::builder().user_agent(user_agent).gzip(true);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| AutoDnsError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, url })
    }

    /// Gateway endpoint this transport posts to
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl Transport for HttpsTransport {
    #[instrument(skip(self, document), fields(url = %self.url, bytes = document.len()))]
    async fn send(&self, document: String) -> Result<String> {
        let mut response = self
            .http
            .post(self.url.clone())
            .header(CONTENT_TYPE, "text/xml; charset=utf-8")
            .body(document)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        // Gateway errors arrive inside the XML body, so the status is only logged.
        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "gateway answered with non-success HTTP status");
        }

        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await.map_err(map_reqwest_error)? {
            body.extend_from_slice(&chunk);
        }
        debug!(status = status.as_u16(), bytes = body.len(), "response received");

        String::from_utf8(body)
            .map_err(|e| AutoDnsError::Encoding(format!("response body is not UTF-8: {e}")))
    }
}

fn map_reqwest_error(e: reqwest::Error) -> AutoDnsError {
    if e.is_timeout() {
        AutoDnsError::Timeout
    } else if e.is_connect() {
        AutoDnsError::Connection(e.to_string())
    } else {
        AutoDnsError::Http(e.to_string())
    }
}
