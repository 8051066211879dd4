//! Mock trace service implementation
//!
//! Serves a programmed trace document and counts fetches for test
//! assertions. Thread-safe via `Arc<Mutex<>>`.

use crate::{CountryError, TraceService};
use std::sync::{Arc, Mutex};

/// Mock trace service with a programmable response.
#[derive(Debug, Clone)]
pub struct MockTraceService {
    response: Arc<Mutex<Result<String, String>>>,
    fetches: Arc<Mutex<u32>>,
}

impl MockTraceService {
    /// Create a mock that serves an empty trace document.
    pub fn new() -> Self {
        Self::with_response("")
    }

    /// Create a mock that serves `document` on every fetch.
    pub fn with_response(document: &str) -> Self {
        Self {
            response: Arc::new(Mutex::new(Ok(document.to_string()))),
            fetches: Arc::new(Mutex::new(0)),
        }
    }

    /// Create a mock whose fetches fail with a request error.
    pub fn failing(message: &str) -> Self {
        Self {
            response: Arc::new(Mutex::new(Err(message.to_string()))),
            fetches: Arc::new(Mutex::new(0)),
        }
    }

    /// Number of fetches performed so far.
    pub fn fetch_count(&self) -> u32 {
        *self.fetches.lock().expect("fetches lock poisoned")
    }
}

impl Default for MockTraceService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl TraceService for MockTraceService {
    async fn fetch_trace(&self) -> Result<String, CountryError> {
        tracing::debug!("Mock trace service: serving programmed response");
        *self
            .fetches
            .lock()
            .map_err(|e| CountryError::Request(format!("fetches lock poisoned: {}", e)))? += 1;

        self.response
            .lock()
            .map_err(|e| CountryError::Request(format!("response lock poisoned: {}", e)))?
            .clone()
            .map_err(CountryError::Request)
    }
}
