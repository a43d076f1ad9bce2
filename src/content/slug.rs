// file: src/content/slug.rs
// description: url slug resolution and trailing separator normalization
// reference: internal slug rules

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TRAILING_SEPARATORS: Regex = Regex::new(r"/*$").expect("valid regex");
    static ref EXTENSION: Regex = Regex::new(r"\.[^./]*$").expect("valid regex");
}

/// Join url segments into one absolute path, collapsing repeated separators
/// and resolving `.` and `..`. A trailing separator on the last segment is kept.
pub fn url_resolve(base: &str, path: &str) -> String {
    let joined = format!("{}/{}", base, path);
    let mut parts: Vec<&str> = Vec::new();

    for part in joined.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            other => parts.push(other),
        }
    }

    let mut resolved = format!("/{}", parts.join("/"));
    if joined.ends_with('/') && !resolved.ends_with('/') {
        resolved.push('/');
    }
    resolved
}

/// Slug derived from a file's location inside its content source:
/// `a/b.md` -> `/a/b/`, `a/index.md` -> `/a/`, `index.md` -> `/`.
pub fn file_path_slug(relative_path: &str) -> String {
    let normalized = relative_path.replace('\\', "/");
    let without_ext = EXTENSION.replace(&normalized, "");
    let trimmed = without_ext.trim_matches('/');

    let path = match trimmed.rsplit_once('/') {
        Some((dir, "index")) => dir,
        None if trimmed == "index" => "",
        _ => trimmed,
    };

    if path.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", path)
    }
}

/// Strip any trailing separators, then append exactly one.
pub fn normalize(slug: &str) -> String {
    TRAILING_SEPARATORS.replace(slug, "/").into_owned()
}

/// Slug for a document: an absolute frontmatter slug is used verbatim, a
/// relative one is resolved against `base_path`, otherwise the file path is.
pub fn resolve_slug(base_path: &str, frontmatter_slug: Option<&str>, relative_path: &str) -> String {
    let slug = match frontmatter_slug.filter(|s| !s.is_empty()) {
        Some(slug) if slug.starts_with('/') => slug.to_string(),
        Some(slug) => url_resolve(base_path, slug),
        None => url_resolve(base_path, &file_path_slug(relative_path)),
    };
    normalize(&slug)
}
