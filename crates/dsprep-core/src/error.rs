//! Error type for dataset preparation (download, unpack, filesystem).

use std::path::PathBuf;
use thiserror::Error;

/// Failure while fetching or unpacking a dataset. The underlying error is kept
/// as the source so callers can inspect it unchanged.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    /// Server answered with a non-2xx status.
    #[error("GET {url} returned HTTP {status}")]
    Http { url: String, status: u32 },

    /// Transport failure reported by libcurl (DNS, connect, TLS, aborted write).
    #[error("curl: {0}")]
    Curl(#[from] curl::Error),

    #[error("unsupported archive format: {}", .0.display())]
    UnsupportedArchive(PathBuf),

    #[error("zip: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
