//! Login-info extraction from OAuth redirect URLs
//!
//! After OAuth login the platform redirects back with indexed query
//! parameters (`acct1`, `token1`, `cur1`, `acct2`, ...). This module turns
//! that query string into structured login data plus the list of keys the
//! host must scrub from the address bar.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

lazy_static! {
    static ref ACCT_KEY_REGEX: Regex = Regex::new(r"^acct([0-9]+)").unwrap();
    static ref TOKEN_KEY_REGEX: Regex = Regex::new(r"^token([0-9]+)").unwrap();
    static ref CUR_KEY_REGEX: Regex = Regex::new(r"^cur([0-9]+)").unwrap();
}

/// One authenticated account delivered through the redirect URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginInfo {
    pub loginid: String,
    pub token: String,
    pub currency: String,
}

/// Result of scanning a redirect query string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginParams {
    /// Fully-formed accounts, in ascending index order
    pub login_info: Vec<LoginInfo>,
    /// Every matched query key, in query-appearance order
    pub params_to_delete: Vec<String>,
}

#[derive(Debug, Default)]
struct PartialLogin {
    loginid: Option<String>,
    token: Option<String>,
    currency: Option<String>,
}

impl PartialLogin {
    /// A login only counts once all three fields arrived non-empty.
    fn into_complete(self) -> Option<LoginInfo> {
        match (self.loginid, self.token, self.currency) {
            (Some(loginid), Some(token), Some(currency))
                if !loginid.is_empty() && !token.is_empty() && !currency.is_empty() =>
            {
                Some(LoginInfo {
                    loginid,
                    token,
                    currency,
                })
            }
            _ => None,
        }
    }
}

fn key_suffix<'a>(regex: &Regex, key: &'a str) -> Option<&'a str> {
    let captures = regex.captures(key)?;
    Some(captures.get(1)?.as_str())
}

/// Suffixes index accounts from 1. Zero and digit runs too long to parse
/// index nothing.
fn account_index(digits: &str) -> Option<u64> {
    digits.parse().ok().filter(|index| *index > 0)
}

/// Extract login info from a redirect query string.
///
/// Accepts the raw query with or without its leading `?`. Keys are matched
/// by prefix (`acct<N>`, `token<N>`, `cur<N>`); every matched key lands in
/// `params_to_delete` even when its triple never completes, so the host
/// always scrubs credentials from the address bar. A matched key whose
/// suffix cannot index an account (zero, or digits past the indexable
/// range) is recorded for deletion but never produces an account.
pub fn extract_login_info(search: &str) -> LoginParams {
    let query = search.strip_prefix('?').unwrap_or(search);

    let mut entries: BTreeMap<u64, PartialLogin> = BTreeMap::new();
    let mut params_to_delete = Vec::new();

    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        let mut matched = false;

        if let Some(digits) = key_suffix(&ACCT_KEY_REGEX, &key) {
            matched = true;
            if let Some(index) = account_index(digits) {
                entries.entry(index).or_default().loginid = Some(value.to_string());
            }
        }
        if let Some(digits) = key_suffix(&TOKEN_KEY_REGEX, &key) {
            matched = true;
            if let Some(index) = account_index(digits) {
                entries.entry(index).or_default().token = Some(value.to_string());
            }
        }
        if let Some(digits) = key_suffix(&CUR_KEY_REGEX, &key) {
            matched = true;
            if let Some(index) = account_index(digits) {
                entries.entry(index).or_default().currency = Some(value.to_string());
            }
        }

        if matched {
            params_to_delete.push(key.to_string());
        }
    }

    let login_info: Vec<LoginInfo> = entries
        .into_values()
        .filter_map(PartialLogin::into_complete)
        .collect();

    if !login_info.is_empty() {
        tracing::debug!(
            accounts = login_info.len(),
            "Extracted login info from redirect query"
        );
    }

    LoginParams {
        login_info,
        params_to_delete,
    }
}
