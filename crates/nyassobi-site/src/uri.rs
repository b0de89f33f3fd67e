//! CMS URI normalization

/// Normalize a route path into the identifier the CMS looks nodes up by.
///
/// Leading and trailing slashes are stripped; the site root is `/`.
pub fn normalize_uri(path: &str) -> String {
    let trimmed = path.trim().trim_start_matches('/').trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}
