//! Extracting a bare account name from a profile handle or URL.

use reqwest::Url;

/// Returns the bare GitHub username for `input`.
///
/// Accepts a handle (`octocat`, `@octocat`) or a profile URL with or without
/// a scheme (`https://github.com/octocat/`, `github.com/octocat`). Returns
/// `None` for missing or blank input, URLs without a path segment, and
/// anything that fails to parse.
#[must_use]
pub fn extract_username(input: Option<&str>) -> Option<String> {
    let trimmed = input?.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return None;
    }

    if !trimmed.contains("://") && !trimmed.contains('/') {
        return non_empty(strip_at(trimmed));
    }

    let normalized = if trimmed.starts_with("http") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };
    let url = Url::parse(&normalized).ok()?;
    let first = url.path_segments()?.find(|segment| !segment.is_empty())?;
    non_empty(strip_at(first))
}

/// Case-insensitive username comparison; GitHub logins are not case-sensitive.
#[must_use]
pub fn same_user(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

fn strip_at(value: &str) -> &str {
    value.strip_prefix('@').unwrap_or(value)
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
