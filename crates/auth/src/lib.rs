//! Authentication-session utilities for the Deriv client
//!
//! This crate provides:
//! - Extraction of login credentials from OAuth redirect query strings
//! - Classification of login ids into real and virtual accounts
//! - Selection of the default active account for a fresh session

pub mod account;
pub mod login;

pub use account::{default_active_account, is_virtual_loginid, AccountType};
pub use login::{extract_login_info, LoginInfo, LoginParams};
