//! Country Fallback Integration Tests
//!
//! Verifies the country lookup degrades gracefully: connection trace
//! first, stored website status second, empty string last.

use deriv_utils::country::{lookup_country, mock::MockTraceService};
use deriv_utils::{deferred, MemoryStore, StorageKey};

#[tokio::test]
async fn test_country_resolved_from_trace() {
    let service = MockTraceService::with_response("fl=123\nip=203.0.113.7\nloc=US\ntls=TLSv1.3");
    let store = MemoryStore::new();

    assert_eq!(lookup_country(&service, &store).await, "us");
    assert_eq!(service.fetch_count(), 1);
}

#[tokio::test]
async fn test_country_falls_back_to_website_status() {
    let service = MockTraceService::failing("connection refused");
    let store = MemoryStore::new().with_value(StorageKey::WebsiteStatus, r#"{"loc":"br"}"#);

    assert_eq!(lookup_country(&service, &store).await, "br");
}

#[tokio::test]
async fn test_country_trace_without_loc_uses_website_status() {
    let service = MockTraceService::with_response("fl=123\nip=203.0.113.7");
    let store = MemoryStore::new().with_value(StorageKey::WebsiteStatus, r#"{"loc":"GB"}"#);

    // Stored website status is returned as stored
    assert_eq!(lookup_country(&service, &store).await, "GB");
}

#[tokio::test]
async fn test_country_degrades_to_empty_string() {
    let service = MockTraceService::failing("connection refused");
    let store = MemoryStore::new();

    assert_eq!(lookup_country(&service, &store).await, "");
}

#[tokio::test]
async fn test_country_delivered_through_deferred() {
    // Hosts hand the pending lookup to consumers before it settles
    let service = MockTraceService::with_response("loc=FR\n");
    let store = MemoryStore::new();
    let (pending, handle) = deferred::<String, String>();

    tokio::spawn(async move {
        let country = lookup_country(&service, &store).await;
        let _ = handle.resolve(country);
    });

    assert_eq!(pending.wait().await.expect("lookup resolves"), "fr");
}
