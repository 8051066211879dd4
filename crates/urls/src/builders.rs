//! Outbound URL builders
//!
//! OAuth login, WebSocket API, and deriv.com static-content URLs. Session
//! state (language, overrides, active account) comes in through the
//! [`ClientStore`], and the hostname the page is served from comes in as
//! an explicit parameter, never from ambient globals.

use deriv_utils_common::{ClientStore, StorageKey};

use crate::constants::{
    APP_BRAND, DEFAULT_LANGUAGE, DERIV_COM_PRODUCTION, DERIV_COM_PRODUCTION_EU,
    OAUTH_AUTHORIZE_URL,
};
use crate::path::normalize_path;
use crate::server::{get_app_id, get_server_url};

/// Options for [`get_deriv_static_url`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticUrlOptions {
    /// Link to the EU production site
    pub is_eu: bool,
    /// Path points at a document, skip the language segment
    pub is_document: bool,
}

fn language(store: &dyn ClientStore) -> String {
    store
        .get(StorageKey::I18nLanguage)
        .filter(|lang| !lang.is_empty())
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
}

/// OAuth authorization URL for the current session.
///
/// `hostname` is the host the page is served from; first-party hosts
/// resolve to their registered app id unless an override is stored.
pub fn get_oauth_url(store: &dyn ClientStore, hostname: Option<&str>) -> String {
    format!(
        "{}?app_id={}&l={}&brand={}",
        OAUTH_AUTHORIZE_URL,
        get_app_id(store, hostname),
        language(store),
        APP_BRAND
    )
}

/// WebSocket API URL for the current session.
///
/// `hostname` feeds app-id resolution the same way as [`get_oauth_url`].
pub fn get_websocket_url(store: &dyn ClientStore, hostname: Option<&str>) -> String {
    format!(
        "wss://{}/websockets/v3?app_id={}&l={}&brand={}",
        get_server_url(store),
        get_app_id(store, hostname),
        language(store),
        APP_BRAND
    )
}

/// Static-content URL on deriv.com for the current session.
///
/// The language segment is the stored language lowercased with its first
/// underscore turned into a hyphen (`ZH_TW` becomes `zh-tw`). English and
/// document links carry no language segment.
pub fn get_deriv_static_url(
    store: &dyn ClientStore,
    path: &str,
    options: StaticUrlOptions,
) -> String {
    let host = if options.is_eu {
        DERIV_COM_PRODUCTION_EU
    } else {
        DERIV_COM_PRODUCTION
    };
    let language = language(store).to_lowercase().replacen('_', "-", 1);
    let path = normalize_path(path);

    if options.is_document || language == "en" {
        format!("{}/{}", host, path)
    } else {
        format!("{}/{}/{}", host, language, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deriv_utils_common::MemoryStore;

    #[test]
    fn test_oauth_url_uses_configured_app_id_and_language() {
        let store = MemoryStore::new()
            .with_value(StorageKey::I18nLanguage, "AR")
            .with_value(StorageKey::ConfigAppId, "420");

        // The stored override beats the hostname table
        assert_eq!(
            get_oauth_url(&store, Some("app.deriv.com")),
            "https://oauth.deriv.com/oauth2/authorize?app_id=420&l=AR&brand=deriv"
        );
    }

    #[test]
    fn test_oauth_url_falls_back_to_english() {
        let store = MemoryStore::new().with_value(StorageKey::ConfigAppId, "420");

        assert_eq!(
            get_oauth_url(&store, None),
            "https://oauth.deriv.com/oauth2/authorize?app_id=420&l=EN&brand=deriv"
        );
    }

    #[test]
    fn test_oauth_url_derives_app_id_from_first_party_hostname() {
        let store = MemoryStore::new();

        assert_eq!(
            get_oauth_url(&store, Some("app.deriv.com")),
            "https://oauth.deriv.com/oauth2/authorize?app_id=16929&l=EN&brand=deriv"
        );
    }

    #[test]
    fn test_websocket_url() {
        let store = MemoryStore::new()
            .with_value(StorageKey::ConfigServerUrl, "ws.derivws.com")
            .with_value(StorageKey::ConfigAppId, "777")
            .with_value(StorageKey::I18nLanguage, "FR");

        assert_eq!(
            get_websocket_url(&store, None),
            "wss://ws.derivws.com/websockets/v3?app_id=777&l=FR&brand=deriv"
        );
    }

    #[test]
    fn test_websocket_url_defaults() {
        let store = MemoryStore::new();

        assert_eq!(
            get_websocket_url(&store, None),
            "wss://blue.derivws.com/websockets/v3?app_id=36300&l=EN&brand=deriv"
        );
    }

    #[test]
    fn test_websocket_url_derives_app_id_from_first_party_hostname() {
        let store = MemoryStore::new().with_value(StorageKey::ActiveLoginid, "CR1069");

        assert_eq!(
            get_websocket_url(&store, Some("app.deriv.com")),
            "wss://green.derivws.com/websockets/v3?app_id=16929&l=EN&brand=deriv"
        );
    }

    #[test]
    fn test_static_url_default_language() {
        let store = MemoryStore::new().with_value(StorageKey::I18nLanguage, "EN");

        assert_eq!(
            get_deriv_static_url(&store, "/p2p/", StaticUrlOptions::default()),
            "https://deriv.com/p2p"
        );
    }

    #[test]
    fn test_static_url_spanish_language() {
        let store = MemoryStore::new().with_value(StorageKey::I18nLanguage, "ES");

        assert_eq!(
            get_deriv_static_url(&store, "/p2p/", StaticUrlOptions::default()),
            "https://deriv.com/es/p2p"
        );
    }

    #[test]
    fn test_static_url_language_with_underscore() {
        let store = MemoryStore::new().with_value(StorageKey::I18nLanguage, "ZH_TW");

        assert_eq!(
            get_deriv_static_url(&store, "/p2p/", StaticUrlOptions::default()),
            "https://deriv.com/zh-tw/p2p"
        );
    }

    #[test]
    fn test_static_url_eu_host() {
        let store = MemoryStore::new();
        let options = StaticUrlOptions {
            is_eu: true,
            ..Default::default()
        };

        assert_eq!(
            get_deriv_static_url(&store, "/p2p/", options),
            "https://eu.deriv.com/p2p"
        );
    }

    #[test]
    fn test_static_url_document_skips_language_segment() {
        let store = MemoryStore::new().with_value(StorageKey::I18nLanguage, "ES");
        let options = StaticUrlOptions {
            is_document: true,
            ..Default::default()
        };

        assert_eq!(
            get_deriv_static_url(&store, "regulatory/deriv-com-ltd-membership.pdf", options),
            "https://deriv.com/regulatory/deriv-com-ltd-membership.pdf"
        );
    }

    #[test]
    fn test_static_url_eu_document() {
        let store = MemoryStore::new();
        let options = StaticUrlOptions {
            is_eu: true,
            is_document: true,
        };

        assert_eq!(
            get_deriv_static_url(&store, "regulatory/deriv-com-ltd-membership.pdf", options),
            "https://eu.deriv.com/regulatory/deriv-com-ltd-membership.pdf"
        );
    }
}
