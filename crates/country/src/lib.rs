//! Country lookup for the Deriv client
//!
//! Provides best-effort resolution of the visitor's country with support for:
//! - Cloudflare connection-trace fetching for production
//! - Mock trace service for testing and development
//! - Fallback to the host's stored website-status document
//!
//! Resolution never fails: any error degrades to an empty string.

pub mod client;
pub mod mock;

use deriv_utils_common::{ClientStore, StorageKey};
use thiserror::Error;

/// Default Cloudflare connection-trace endpoint
pub const DEFAULT_TRACE_URL: &str = "https://www.cloudflare.com/cdn-cgi/trace";

#[derive(Error, Debug)]
pub enum CountryError {
    #[error("Country configuration error: {0}")]
    Configuration(String),

    #[error("Country request error: {0}")]
    Request(String),

    #[error("Country response error: {0}")]
    Response(String),
}

/// Country lookup configuration.
#[derive(Debug, Clone)]
pub struct CountryConfig {
    /// Country provider (trace, mock)
    pub provider: String,
    /// Connection-trace endpoint URL
    pub trace_url: String,
}

impl CountryConfig {
    /// Create country config from environment variables.
    pub fn from_env() -> Result<Self, CountryError> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let provider = std::env::var("COUNTRY_PROVIDER").unwrap_or_else(|_| "trace".to_string());
        let trace_url = std::env::var("CLOUDFLARE_TRACE_URL")
            .unwrap_or_else(|_| DEFAULT_TRACE_URL.to_string());

        if trace_url.is_empty() {
            return Err(CountryError::Configuration(
                "CLOUDFLARE_TRACE_URL must not be empty".to_string(),
            ));
        }

        Ok(Self { provider, trace_url })
    }
}

/// Trace service trait for different implementations.
#[async_trait::async_trait]
pub trait TraceService: Send + Sync {
    /// Fetch the raw connection-trace document (`key=value` per line).
    async fn fetch_trace(&self) -> Result<String, CountryError>;
}

/// Factory for creating TraceService implementations.
pub struct CountryServiceFactory;

impl CountryServiceFactory {
    /// Create a TraceService based on configuration.
    pub fn create(config: CountryConfig) -> Result<Box<dyn TraceService>, CountryError> {
        match config.provider.as_str() {
            "trace" => {
                tracing::info!("Creating Cloudflare trace client");
                Ok(Box::new(client::CloudflareTraceClient::new(config)))
            }
            "mock" => {
                tracing::info!("Creating mock trace service");
                Ok(Box::new(mock::MockTraceService::new()))
            }
            provider => Err(CountryError::Configuration(format!(
                "Unknown country provider: {}. Supported providers: trace, mock",
                provider
            ))),
        }
    }
}

/// Value of the last `loc=` line in a trace document.
///
/// Later duplicate keys shadow earlier ones; a value is cut at the next
/// `=` sign.
pub fn parse_trace_loc(document: &str) -> Option<String> {
    let mut loc = None;
    for line in document.lines() {
        let mut parts = line.split('=');
        if parts.next() == Some("loc") {
            loc = Some(parts.next().unwrap_or("").to_string());
        }
    }
    loc
}

fn website_status_loc(store: &dyn ClientStore) -> Option<String> {
    let raw = store.get(StorageKey::WebsiteStatus)?;
    let status: serde_json::Value = serde_json::from_str(&raw).ok()?;
    status.get("loc")?.as_str().map(|loc| loc.to_string())
}

/// Resolve the visitor's country code, lowercased, best effort.
///
/// The trace document's `loc` wins and is lowercased. When the fetch
/// fails or carries no location, the `loc` field of the stored
/// website-status document is returned as stored. Everything failing
/// resolves to an empty string.
pub async fn lookup_country(service: &dyn TraceService, store: &dyn ClientStore) -> String {
    match service.fetch_trace().await {
        Ok(document) => {
            if let Some(loc) = parse_trace_loc(&document).filter(|loc| !loc.is_empty()) {
                return loc.to_lowercase();
            }
            tracing::debug!("Trace document carried no location, using stored website status");
            website_status_loc(store).unwrap_or_default()
        }
        Err(error) => {
            tracing::warn!(error = %error, "Country trace fetch failed, using stored website status");
            website_status_loc(store).unwrap_or_default()
        }
    }
}
