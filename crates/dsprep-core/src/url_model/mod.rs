//! URL modeling and dataset naming.
//!
//! Derives the local archive filename from the URL path (sanitized for
//! Linux filesystems) and the dataset directory name from that filename.

mod path;
mod sanitize;

pub use path::filename_from_url;
pub use sanitize::sanitize_filename_for_linux;

use url::Url;

/// Default filename when the URL path yields nothing usable.
const DEFAULT_FILENAME: &str = "download.bin";

/// Derives a safe filename for saving the archive behind `url`.
///
/// Uses the last path segment of `url`, sanitized for Linux (no `/`, NUL, or
/// control chars; no leading/trailing dots or spaces). Falls back to
/// `download.bin` when nothing usable remains.
///
/// # Examples
///
/// - `https://example.com/data/foo.tar.gz` → `"foo.tar.gz"`
/// - `https://example.com/` → `"download.bin"`
/// - `https://example.com/mnist/` → `"download.bin"`
pub fn derive_filename(url: &Url) -> String {
    let raw = match filename_from_url(url) {
        Some(c) => c,
        None => return DEFAULT_FILENAME.to_string(),
    };

    let sanitized = sanitize_filename_for_linux(&raw);
    if sanitized.is_empty() || sanitized == "." || sanitized == ".." {
        DEFAULT_FILENAME.to_string()
    } else {
        sanitized
    }
}

/// Dataset directory name for an archive filename: everything before the
/// first `.`, so `foo.tar.gz` and `foo.zip` both map to `foo`.
pub fn dataset_name(file_name: &str) -> &str {
    file_name.split('.').next().unwrap_or(file_name)
}
