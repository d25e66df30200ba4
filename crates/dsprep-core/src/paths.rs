//! `~` expansion for user-supplied directories.

use std::path::{Path, PathBuf};

/// Expands a leading `~` (alone or followed by `/`) to the home directory.
///
/// `~user` forms, relative and absolute paths are returned unchanged, as is
/// everything when the home directory cannot be determined.
pub fn expand_home(path: &Path) -> PathBuf {
    match dirs::home_dir() {
        Some(home) => expand_home_with(path, &home),
        None => path.to_path_buf(),
    }
}

fn expand_home_with(path: &Path, home: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) if rest.as_os_str().is_empty() => home.to_path_buf(),
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}
