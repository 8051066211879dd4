//! URL utilities for the Deriv client
//!
//! This crate provides:
//! - OAuth, WebSocket, and static-content URL builders
//! - Server and app-id resolution with user overrides
//! - Query-string reading and rewriting
//! - Path normalization and the brand domain allow-list

pub mod builders;
pub mod constants;
pub mod domain;
pub mod path;
pub mod query;
pub mod server;

pub use builders::{get_deriv_static_url, get_oauth_url, get_websocket_url, StaticUrlOptions};
pub use constants::{
    app_id_for_hostname, Environment, APP_BRAND, DEFAULT_APP_ID, DEFAULT_LANGUAGE,
    DERIV_COM_PRODUCTION, DERIV_COM_PRODUCTION_EU, OAUTH_AUTHORIZE_URL,
};
pub use domain::is_domain_allowed;
pub use path::normalize_path;
pub use query::{filter_search_params, get_query_parameter};
pub use server::{get_app_id, get_server_url};
