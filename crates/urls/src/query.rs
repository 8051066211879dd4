//! Query-string reading and rewriting
//!
//! Pure string transformations: the host owns the address bar and applies
//! the rewritten query itself.

/// First value for `key` in a query string, form-urldecoded.
///
/// Accepts the query with or without its leading `?`.
pub fn get_query_parameter(search: &str, key: &str) -> Option<String> {
    let query = search.strip_prefix('?').unwrap_or(search);

    url::form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, value)| value.to_string())
}

/// Remove every pair whose key appears in `keys_to_remove`.
///
/// Remaining pairs keep their order and are re-encoded
/// form-urlencoded. Returns the rewritten query with a leading `?`, or an
/// empty string when nothing survives. Keys with no match are ignored, so
/// an empty or irrelevant removal list leaves the query unchanged.
pub fn filter_search_params(search: &str, keys_to_remove: &[&str]) -> String {
    let query = search.strip_prefix('?').unwrap_or(search);

    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        if keys_to_remove.iter().any(|remove| *remove == key) {
            continue;
        }
        serializer.append_pair(&key, &value);
    }

    let filtered = serializer.finish();
    if filtered.is_empty() {
        String::new()
    } else {
        format!("?{}", filtered)
    }
}
