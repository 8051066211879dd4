//! Path normalization for static-content links

fn is_allowed_path_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | '(' | ')' | '#')
}

/// Normalize a path segment for use in a static-content URL.
///
/// Strips one leading and one trailing slash, then drops every character
/// outside `[a-zA-Z0-9-_./()#]`. Inner slashes survive, so multi-segment
/// paths pass through intact.
pub fn normalize_path(path: &str) -> String {
    let path = path.strip_prefix('/').unwrap_or(path);
    let path = path.strip_suffix('/').unwrap_or(path);
    path.chars().filter(|c| is_allowed_path_char(*c)).collect()
}
