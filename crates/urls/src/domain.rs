//! Brand domain allow-list

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ALLOWED_DOMAIN_REGEX: Regex = Regex::new(
        r"^((.*)\.)?(localhost:[0-9]+|pages\.dev|binary\.sx|binary\.com|deriv\.(com|me|be|dev))$"
    )
    .unwrap();
}

/// Whether a hostname belongs to the brand.
///
/// Allowed when the hostname is exactly, or is a subdomain of, a
/// first-party domain or a local/preview host (`localhost:<port>`,
/// `pages.dev`). Matching is anchored, so look-alike TLD extensions such
/// as `deriv.com.au` stay out.
pub fn is_domain_allowed(hostname: &str) -> bool {
    ALLOWED_DOMAIN_REGEX.is_match(hostname)
}
