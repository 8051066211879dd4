//! Static platform constants
//!
//! Backend environment hostnames, the registered app id for each first-party
//! domain, and the hosts outbound links are built against.

use std::fmt;

/// App id used when the host is not a first-party domain and no override is set
pub const DEFAULT_APP_ID: &str = "36300";

/// Brand tag appended to OAuth and WebSocket URLs
pub const APP_BRAND: &str = "deriv";

/// Language used when the store carries no `i18n_language`
pub const DEFAULT_LANGUAGE: &str = "EN";

/// OAuth authorization endpoint
pub const OAUTH_AUTHORIZE_URL: &str = "https://oauth.deriv.com/oauth2/authorize";

/// Production static-content host
pub const DERIV_COM_PRODUCTION: &str = "https://deriv.com";

/// EU production static-content host
pub const DERIV_COM_PRODUCTION_EU: &str = "https://eu.deriv.com";

/// Backend environment a session is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Real,
    Demo,
}

impl Environment {
    /// WebSocket server hostname for this environment
    pub const fn hostname(&self) -> &'static str {
        match self {
            Environment::Real => "green.derivws.com",
            Environment::Demo => "blue.derivws.com",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Real => write!(f, "real"),
            Environment::Demo => write!(f, "demo"),
        }
    }
}

/// App id registered for a first-party hostname, if any.
pub fn app_id_for_hostname(hostname: &str) -> Option<&'static str> {
    match hostname {
        "deriv.app" | "app.deriv.com" => Some("16929"),
        "staging-app.deriv.com" => Some("16303"),
        "app.deriv.me" | "staging-app.deriv.me" => Some("1411"),
        "app.deriv.be" => Some("30767"),
        "staging-app.deriv.be" => Some("31186"),
        "binary.com" => Some("1"),
        "test-app.deriv.com" => Some("51072"),
        "p2p.deriv.com" => Some("61859"),
        "staging-p2p.deriv.com" => Some("62019"),
        "api.deriv.com" => Some("36544"),
        "staging-api.deriv.com" => Some("36545"),
        "smarttrader.deriv.com" => Some("22168"),
        "staging-smarttrader.deriv.com" => Some("22169"),
        _ => None,
    }
}
