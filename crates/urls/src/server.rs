//! Backend server and app-id resolution

use deriv_utils_auth::is_virtual_loginid;
use deriv_utils_common::{ClientStore, StorageKey};

use crate::constants::{app_id_for_hostname, Environment, DEFAULT_APP_ID};

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Resolve the WebSocket server hostname for the current session.
///
/// A user-configured override always wins. Otherwise the active login id
/// picks the environment: a real-money account routes to the real backend,
/// anything else (virtual account, no account) routes to demo.
pub fn get_server_url(store: &dyn ClientStore) -> String {
    if let Some(server_url) = non_empty(store.get(StorageKey::ConfigServerUrl)) {
        tracing::debug!(server_url = %server_url, "Using user-configured server URL");
        return server_url;
    }

    let environment = match non_empty(store.get(StorageKey::ActiveLoginid)) {
        Some(loginid) if !is_virtual_loginid(&loginid) => Environment::Real,
        _ => Environment::Demo,
    };

    environment.hostname().to_string()
}

/// Resolve the app id for the current session.
///
/// A user-configured override always wins; otherwise the hostname the page
/// is served from is looked up in the first-party domain table, falling
/// back to [`DEFAULT_APP_ID`]. Hosts without a page hostname pass `None`.
pub fn get_app_id(store: &dyn ClientStore, hostname: Option<&str>) -> String {
    if let Some(app_id) = non_empty(store.get(StorageKey::ConfigAppId)) {
        tracing::debug!(app_id = %app_id, "Using user-configured app id");
        return app_id;
    }

    hostname
        .and_then(app_id_for_hostname)
        .unwrap_or(DEFAULT_APP_ID)
        .to_string()
}
