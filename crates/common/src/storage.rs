//! Client-store abstraction over browser-local persistent storage
//!
//! The host application owns the actual storage (local storage, cookies).
//! Utility functions receive it as an explicit [`ClientStore`] so they stay
//! pure and testable instead of reading ambient global state.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use crate::error::{Error, Result};

/// Well-known keys in the host application's persistent store.
///
/// Values are read-mostly from this component's point of view: the
/// configuration keys carry user overrides, the client keys carry the
/// session selected by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// User-configured backend server hostname override
    ConfigServerUrl,
    /// User-configured application id override
    ConfigAppId,
    /// Active interface language, an upper-cased code such as `EN` or `ZH_TW`
    I18nLanguage,
    /// Login id of the account currently selected by the host
    ActiveLoginid,
    /// Serialized list of the session's extracted accounts
    AccountList,
    /// Cached website-status document, typically cookie-backed by the host
    WebsiteStatus,
}

impl StorageKey {
    /// Raw key string used by the host application's storage
    pub const fn as_str(&self) -> &'static str {
        match self {
            StorageKey::ConfigServerUrl => "config.server_url",
            StorageKey::ConfigAppId => "config.app_id",
            StorageKey::I18nLanguage => "i18n_language",
            StorageKey::ActiveLoginid => "client.active_loginid",
            StorageKey::AccountList => "client.account_list",
            StorageKey::WebsiteStatus => "website_status",
        }
    }
}

impl fmt::Display for StorageKey {
    #[mutants::skip] // Delegates to as_str() which is covered directly
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StorageKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "config.server_url" => Ok(StorageKey::ConfigServerUrl),
            "config.app_id" => Ok(StorageKey::ConfigAppId),
            "i18n_language" => Ok(StorageKey::I18nLanguage),
            "client.active_loginid" => Ok(StorageKey::ActiveLoginid),
            "client.account_list" => Ok(StorageKey::AccountList),
            "website_status" => Ok(StorageKey::WebsiteStatus),
            other => Err(Error::Validation(format!("Unknown storage key: {}", other))),
        }
    }
}

/// Read/write access to the host's key-value store.
///
/// Implementations use interior mutability; browser-backed stores are
/// shared by nature and the utilities only ever hold `&dyn ClientStore`.
pub trait ClientStore: Send + Sync {
    /// Value stored under `key`, if any
    fn get(&self, key: StorageKey) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: StorageKey, value: &str);

    /// Remove the value stored under `key`
    fn remove(&self, key: StorageKey);
}

/// In-memory [`ClientStore`] for hosts without browser storage and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<StorageKey, String>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value, builder-style
    pub fn with_value(self, key: StorageKey, value: &str) -> Self {
        self.set(key, value);
        self
    }
}

impl ClientStore for MemoryStore {
    fn get(&self, key: StorageKey) -> Option<String> {
        self.values.lock().ok()?.get(&key).cloned()
    }

    fn set(&self, key: StorageKey, value: &str) {
        match self.values.lock() {
            Ok(mut values) => {
                values.insert(key, value.to_string());
            }
            Err(_) => tracing::warn!(key = %key, "client store lock poisoned, dropping write"),
        }
    }

    fn remove(&self, key: StorageKey) {
        match self.values.lock() {
            Ok(mut values) => {
                values.remove(&key);
            }
            Err(_) => tracing::warn!(key = %key, "client store lock poisoned, dropping removal"),
        }
    }
}
