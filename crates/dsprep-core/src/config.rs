use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Global configuration loaded from `~/.config/dsprep/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DsprepConfig {
    /// Dataset root used when `--root` is not given. A leading `~` is expanded.
    pub data_root: String,
    /// Seconds allowed for the TCP/TLS connect phase of a download.
    pub connect_timeout_secs: u64,
    /// Maximum number of HTTP redirects to follow.
    pub max_redirections: u32,
    /// Optional User-Agent override (default `dsprep/<version>`).
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for DsprepConfig {
    fn default() -> Self {
        Self {
            data_root: "~/datasets".to_string(),
            connect_timeout_secs: 30,
            max_redirections: 10,
            user_agent: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dsprep")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DsprepConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<DsprepConfig> {
    if !path.exists() {
        let default_cfg = DsprepConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: DsprepConfig = toml::from_str(&data)?;
    Ok(cfg)
}
