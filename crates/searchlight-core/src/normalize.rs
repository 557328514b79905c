use url::Url;

/// Canonical page key used to join GSC and GA4 rows.
///
/// Absolute URLs keep only their path; anything that does not parse is taken
/// as a raw path. Trailing slashes are stripped (root stays `/`) and a leading
/// slash is enforced. Idempotent and total.
pub fn normalize(path_or_url: &str) -> String {
    let path = match Url::parse(path_or_url) {
        Ok(url) => url.path().to_string(),
        Err(_) => path_or_url.to_string(),
    };

    let trimmed = path.trim_end_matches('/');
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}
