//! Filename extraction from URL path.

use url::Url;

/// Extracts the last path segment of `url` as a filename hint.
///
/// This is the basename of the path: query string and fragment are ignored,
/// and a path ending in `/` has no filename. Returns `None` for an empty or
/// root path, a trailing `/`, or a `.`/`..` segment.
pub fn filename_from_url(url: &Url) -> Option<String> {
    let segment = url.path().rsplit('/').next()?;
    if segment.is_empty() || segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}
