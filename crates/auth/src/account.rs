//! Account classification and default-account selection

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::login::LoginInfo;

/// Whether a login id belongs to a demo or a real-money account.
///
/// This is the only place that knows the login-id prefix convention.
pub fn is_virtual_loginid(loginid: &str) -> bool {
    loginid.starts_with("VRTC")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Real,
    Virtual,
}

impl AccountType {
    pub fn from_loginid(loginid: &str) -> Self {
        if is_virtual_loginid(loginid) {
            AccountType::Virtual
        } else {
            AccountType::Real
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountType::Real => write!(f, "real"),
            AccountType::Virtual => write!(f, "virtual"),
        }
    }
}

/// Pick the account a fresh session should start on.
///
/// Prefers the first virtual account so new sessions land on demo funds;
/// falls back to the first account. Returns a reference into the input,
/// `None` when the list is empty.
pub fn default_active_account(accounts: &[LoginInfo]) -> Option<&LoginInfo> {
    accounts
        .iter()
        .find(|account| is_virtual_loginid(&account.loginid))
        .or_else(|| accounts.first())
}
