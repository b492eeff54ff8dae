//! URL helper functions

use std::path::{Component, Path};

/// Build the output URL for a markdown file, given its path relative to the
/// project root.
///
/// # Examples
/// ```ignore
/// source_url(Path::new("src/blog/hello.md"), true)  // -> "/src/blog/hello"
/// source_url(Path::new("src/blog/hello.md"), false) // -> "/src/blog/hello.html"
/// ```
pub fn source_url(relative: &Path, clean_urls: bool) -> String {
    let without_ext = relative.with_extension("");
    let segments: Vec<String> = without_ext
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().to_string()),
            _ => None,
        })
        .collect();

    let mut url = format!("/{}", segments.join("/"));
    if !clean_urls && segments.last().is_some() {
        url.push_str(".html");
    }
    url
}

/// Remove a leading source-root segment such as `/src` from a URL.
///
/// The prefix only matches a whole segment: `/src/a` becomes `/a`, `/srcdoc`
/// is left alone. A URL that is exactly the prefix becomes `/`. Only one
/// segment is removed, so the rewrite is applied once per record.
pub fn strip_source_prefix(url: &str, prefix: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        return url.to_string();
    }

    match url.strip_prefix(prefix) {
        Some("") => "/".to_string(),
        Some(rest) if rest.starts_with('/') => rest.to_string(),
        _ => url.to_string(),
    }
}

/// Whether a URL points at a collection index page.
///
/// One trailing slash is ignored, then the last path segment is compared
/// against `marker` (`index` or `index.html`).
pub fn is_index_url(url: &str, marker: &str) -> bool {
    let url = url.strip_suffix('/').unwrap_or(url);
    let last = url.rsplit('/').next().unwrap_or(url);
    last == marker
}
