//! Login Flow Integration Tests
//!
//! Exercises the complete redirect-to-session flow: extracting login info
//! from the OAuth redirect query, selecting the default account, persisting
//! the session, scrubbing the address bar, and building outbound URLs from
//! the stored state.

use deriv_utils::auth::{default_active_account, extract_login_info};
use deriv_utils::urls::{
    filter_search_params, get_app_id, get_oauth_url, get_query_parameter, get_server_url,
    get_websocket_url,
};
use deriv_utils::{ClientStore, MemoryStore, StorageKey};

#[tokio::test]
async fn test_oauth_redirect_login_flow_e2e() {
    println!("\n🚀 === OAUTH REDIRECT LOGIN FLOW TEST ===\n");

    let store = MemoryStore::new();
    let search =
        "?acct1=VRTC1069&token1=a1-xbczn&cur1=USD&acct2=CR1069&token2=a1-xbzn2&cur2=GBP&lang=ES";

    // ============================================================================
    // Step 1: Extract login info from the redirect query
    // ============================================================================
    println!("🔎 Step 1: Extracting login info from the redirect query...");

    let output = extract_login_info(search);
    assert_eq!(output.login_info.len(), 2, "Both accounts should extract");
    assert_eq!(
        output.params_to_delete,
        vec!["acct1", "token1", "cur1", "acct2", "token2", "cur2"]
    );
    println!("✅ Extracted {} accounts", output.login_info.len());

    // ============================================================================
    // Step 2: Select the default account and persist the session
    // ============================================================================
    println!("📝 Step 2: Selecting and persisting the default account...");

    let selected = default_active_account(&output.login_info).expect("accounts were extracted");
    assert_eq!(selected.loginid, "VRTC1069", "Virtual account is preferred");

    store.set(StorageKey::ActiveLoginid, &selected.loginid);
    let account_list = serde_json::to_string(&output.login_info).expect("login info serializes");
    store.set(StorageKey::AccountList, &account_list);

    if let Some(lang) = get_query_parameter(search, "lang") {
        store.set(StorageKey::I18nLanguage, &lang);
    }
    println!("✅ Session persisted for {}", selected.loginid);

    // ============================================================================
    // Step 3: Scrub credentials from the address bar
    // ============================================================================
    println!("🧹 Step 3: Scrubbing credential params from the query...");

    let keys: Vec<&str> = output
        .params_to_delete
        .iter()
        .map(String::as_str)
        .collect();
    let rewritten = filter_search_params(search, &keys);
    assert_eq!(rewritten, "?lang=ES", "Only non-credential params survive");

    // ============================================================================
    // Step 4: Build outbound URLs from the stored session
    // ============================================================================
    println!("🔗 Step 4: Building outbound URLs from the stored session...");

    assert_eq!(get_server_url(&store), "blue.derivws.com");
    assert_eq!(
        get_websocket_url(&store, None),
        "wss://blue.derivws.com/websockets/v3?app_id=36300&l=ES&brand=deriv"
    );
    assert_eq!(
        get_oauth_url(&store, None),
        "https://oauth.deriv.com/oauth2/authorize?app_id=36300&l=ES&brand=deriv"
    );

    // Switching to the real account moves the session to the real backend
    store.set(StorageKey::ActiveLoginid, "CR1069");
    assert_eq!(get_server_url(&store), "green.derivws.com");
    assert_eq!(
        get_websocket_url(&store, None),
        "wss://green.derivws.com/websockets/v3?app_id=36300&l=ES&brand=deriv"
    );

    println!("\n✅ Login flow completed end to end");
}

#[tokio::test]
async fn test_fresh_visitor_without_redirect_params() {
    let store = MemoryStore::new();

    let output = extract_login_info("?utm_source=newsletter");
    assert!(output.login_info.is_empty());
    assert!(output.params_to_delete.is_empty());
    assert!(default_active_account(&output.login_info).is_none());

    // No session state: demo server, default app id, English
    assert_eq!(get_server_url(&store), "blue.derivws.com");
    assert_eq!(
        get_oauth_url(&store, None),
        "https://oauth.deriv.com/oauth2/authorize?app_id=36300&l=EN&brand=deriv"
    );
}

#[tokio::test]
async fn test_session_restored_from_account_list() {
    // A returning visitor's accounts come from the store, not the URL
    let store = MemoryStore::new();
    let accounts = extract_login_info("?acct1=CR900&token1=a1-aaa&cur1=USD").login_info;
    store.set(
        StorageKey::AccountList,
        &serde_json::to_string(&accounts).expect("login info serializes"),
    );

    let stored = store.get(StorageKey::AccountList).expect("list was stored");
    let restored: Vec<deriv_utils::auth::LoginInfo> =
        serde_json::from_str(&stored).expect("stored list parses");
    assert_eq!(restored, accounts);

    let selected = default_active_account(&restored).expect("one account restored");
    store.set(StorageKey::ActiveLoginid, &selected.loginid);
    assert_eq!(get_server_url(&store), "green.derivws.com");
}

#[tokio::test]
async fn test_first_party_hostname_app_id() {
    let store = MemoryStore::new();

    assert_eq!(get_app_id(&store, Some("app.deriv.com")), "16929");
    assert_eq!(get_app_id(&store, Some("smarttrader.deriv.com")), "22168");
    assert_eq!(get_app_id(&store, Some("not-deriv.example")), "36300");

    // First-party hosts carry their registered app id in outbound URLs
    assert_eq!(
        get_oauth_url(&store, Some("app.deriv.com")),
        "https://oauth.deriv.com/oauth2/authorize?app_id=16929&l=EN&brand=deriv"
    );
    assert_eq!(
        get_websocket_url(&store, Some("app.deriv.com")),
        "wss://blue.derivws.com/websockets/v3?app_id=16929&l=EN&brand=deriv"
    );

    // A user-configured app id overrides the hostname table
    store.set(StorageKey::ConfigAppId, "420");
    assert_eq!(get_app_id(&store, Some("app.deriv.com")), "420");
    assert_eq!(
        get_oauth_url(&store, Some("app.deriv.com")),
        "https://oauth.deriv.com/oauth2/authorize?app_id=420&l=EN&brand=deriv"
    );
}
