//! Cloudflare trace client implementation
//!
//! Real HTTP client that GETs the connection-trace document from the
//! configured endpoint.

use crate::{CountryConfig, CountryError, TraceService};

/// Real trace client fetching from the Cloudflare trace endpoint.
pub struct CloudflareTraceClient {
    http: reqwest::Client,
    trace_url: String,
}

impl CloudflareTraceClient {
    /// Create a new trace client from configuration.
    pub fn new(config: CountryConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            trace_url: config.trace_url,
        }
    }
}

#[async_trait::async_trait]
impl TraceService for CloudflareTraceClient {
    async fn fetch_trace(&self) -> Result<String, CountryError> {
        let response = self
            .http
            .get(&self.trace_url)
            .send()
            .await
            .map_err(|e| CountryError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read response body".to_string());
            return Err(CountryError::Response(format!(
                "Trace endpoint returned {}: {}",
                status, body
            )));
        }

        let document = response
            .text()
            .await
            .map_err(|e| CountryError::Response(e.to_string()))?;

        tracing::debug!(bytes = document.len(), "Connection trace fetched");
        Ok(document)
    }
}
