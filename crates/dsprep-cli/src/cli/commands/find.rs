//! Find command: print the unique path matching a glob pattern.

use anyhow::Result;
use dsprep_core::try_find_path;
use std::path::Path;

pub fn run_find(root: &Path, pattern: &str) -> Result<()> {
    let found = try_find_path(root, pattern)?;
    println!("{}", found.display());
    Ok(())
}
