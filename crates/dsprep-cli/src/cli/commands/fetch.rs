//! Fetch command: download + unpack a dataset under the root.

use anyhow::{Context, Result};
use dsprep_core::config::DsprepConfig;
use dsprep_core::{prepare_dataset_with, FetchOptions};
use std::path::Path;

/// Prepare the dataset at `url` under `root` and print its directory.
pub fn run_fetch(url: &str, root: &Path, cfg: &DsprepConfig) -> Result<()> {
    let opts = FetchOptions::from(cfg);
    let out = prepare_dataset_with(url, root, &opts)
        .with_context(|| format!("preparing dataset from {}", url))?;
    println!("{}", out.display());
    Ok(())
}
