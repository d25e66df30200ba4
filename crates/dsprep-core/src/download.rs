//! Single-stream HTTP GET downloader.
//!
//! Streams the response body into a temp file next to the destination and
//! renames it into place only after a complete 2xx transfer, so `dest`
//! never holds a partial body.

use crate::config::DsprepConfig;
use crate::error::DatasetError;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

/// Transfer settings for [`download_to`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    pub connect_timeout: Duration,
    pub max_redirections: u32,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(30),
            max_redirections: 10,
            user_agent: default_user_agent(),
        }
    }
}

impl From<&DsprepConfig> for FetchOptions {
    fn from(cfg: &DsprepConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            max_redirections: cfg.max_redirections,
            user_agent: cfg.user_agent.clone().unwrap_or_else(default_user_agent),
        }
    }
}

fn default_user_agent() -> String {
    format!("dsprep/{}", env!("CARGO_PKG_VERSION"))
}

/// Downloads `url` with a single GET (no Range, no retry) into `dest`.
/// Returns the number of bytes written.
pub fn download_to(url: &str, dest: &Path, opts: &FetchOptions) -> Result<u64, DatasetError> {
    let dir = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut part = tempfile::Builder::new()
        .prefix(".dsprep-")
        .suffix(".part")
        .tempfile_in(dir)?;

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(opts.max_redirections)?;
    easy.useragent(&opts.user_agent)?;
    easy.connect_timeout(opts.connect_timeout)?;

    let mut written: u64 = 0;
    let mut write_err: Option<io::Error> = None;
    {
        let file = part.as_file_mut();
        let mut transfer = easy.transfer();
        transfer.write_function(|data| match file.write_all(data) {
            Ok(()) => {
                written += data.len() as u64;
                Ok(data.len())
            }
            Err(e) => {
                tracing::warn!("download write failed: {}", e);
                write_err = Some(e);
                Ok(0) // abort transfer
            }
        })?;
        let performed = transfer.perform();
        drop(transfer);
        if let Some(e) = write_err.take() {
            return Err(e.into());
        }
        performed?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(DatasetError::Http {
            url: url.to_string(),
            status: code,
        });
    }

    part.as_file().sync_all()?;
    part.persist(dest).map_err(|e| e.error)?;
    tracing::debug!("downloaded {} bytes from {} to {}", written, url, dest.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = FetchOptions::default();
        assert_eq!(opts.connect_timeout, Duration::from_secs(30));
        assert_eq!(opts.max_redirections, 10);
        assert!(opts.user_agent.starts_with("dsprep/"));
    }

    #[test]
    fn options_from_config() {
        let cfg = DsprepConfig {
            connect_timeout_secs: 5,
            max_redirections: 2,
            user_agent: Some("lab-bot/1.0".to_string()),
            ..DsprepConfig::default()
        };
        let opts = FetchOptions::from(&cfg);
        assert_eq!(opts.connect_timeout, Duration::from_secs(5));
        assert_eq!(opts.max_redirections, 2);
        assert_eq!(opts.user_agent, "lab-bot/1.0");
    }
}
