//! Shared foundation for the Deriv client utilities
//!
//! This crate provides:
//! - Common error types used across the workspace
//! - The [`ClientStore`] abstraction over host-application storage
//! - JSON validity checking and externally-settled deferred values

pub mod defer;
pub mod error;
pub mod json;
pub mod storage;

pub use defer::{deferred, Deferred, Pending, SettleError};
pub use error::{Error, Result};
pub use json::is_valid_json;
pub use storage::{ClientStore, MemoryStore, StorageKey};
