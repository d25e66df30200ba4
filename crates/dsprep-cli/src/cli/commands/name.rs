//! Name command: show how a URL maps onto the dataset root.

use anyhow::{Context, Result};
use dsprep_core::url_model::{dataset_name, derive_filename};

pub fn run_name(url: &str) -> Result<()> {
    let parsed = url::Url::parse(url).with_context(|| format!("invalid URL '{}'", url))?;
    let file_name = derive_filename(&parsed);
    println!("archive: {}", file_name);
    println!("dataset: {}", dataset_name(&file_name));
    Ok(())
}
