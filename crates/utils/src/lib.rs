//! Deriv client utilities
//!
//! Umbrella crate re-exporting the utility crates under stable module names:
//! - [`auth`]: login-info extraction and default-account selection
//! - [`urls`]: URL builders, query-string utilities, and the domain allow-list
//! - [`validation`]: form-input validation patterns
//! - [`country`]: best-effort country lookup
//!
//! The shared foundation (client store, errors, JSON and deferred helpers)
//! is re-exported at the root.

pub use deriv_utils_auth as auth;
pub use deriv_utils_country as country;
pub use deriv_utils_urls as urls;
pub use deriv_utils_validation as validation;

pub use deriv_utils_common::{
    deferred, is_valid_json, ClientStore, Deferred, Error, MemoryStore, Pending, Result,
    SettleError, StorageKey,
};
