//! JSON helpers

/// Check whether `input` is a well-formed JSON document.
///
/// Parse-only, nothing is allocated for the caller. Useful for guarding
/// storage reads before handing them to a typed deserializer.
pub fn is_valid_json(input: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(input).is_ok()
}
