//! Recursive glob search that expects a unique match.

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FindPathError {
    #[error("invalid glob pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },

    #[error(
        "Expected to find exactly one result in {} with pattern {pattern}. Found {}:\n{matches}",
        .root.display(),
        .matches.len()
    )]
    NotExactlyOne {
        root: PathBuf,
        pattern: String,
        matches: PathList,
    },
}

/// Matched paths; displays one path per line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathList(pub Vec<PathBuf>);

impl PathList {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PathList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", p.display())?;
        }
        Ok(())
    }
}

/// Glob expression for `pattern` at any depth below `root`.
///
/// An empty root or `.` searches the current directory and yields relative
/// paths (`data.csv`, not `./data.csv`).
fn search_expr(root: &Path, pattern: &str) -> String {
    if root.as_os_str().is_empty() || root == Path::new(".") {
        return format!("**/{}", pattern);
    }
    let base = glob::Pattern::escape(&root.to_string_lossy());
    if base.ends_with('/') {
        format!("{}**/{}", base, pattern)
    } else {
        format!("{}/**/{}", base, pattern)
    }
}

/// Returns every path under `root` (at any depth, files and directories)
/// whose trailing components match `pattern`, sorted.
///
/// Directories that cannot be read are skipped with a warning.
pub fn find_all(root: &Path, pattern: &str) -> Result<Vec<PathBuf>, FindPathError> {
    let entries = glob::glob(&search_expr(root, pattern)).map_err(|source| {
        FindPathError::Pattern {
            pattern: pattern.to_string(),
            source,
        }
    })?;

    let mut matches: Vec<PathBuf> = entries
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::warn!("skipping {}: {}", e.path().display(), e.error());
                None
            }
        })
        .collect();
    matches.sort();
    matches.dedup();
    Ok(matches)
}

/// Finds the single path under `root` matching `pattern`.
///
/// Zero or several matches yield [`FindPathError::NotExactlyOne`] listing
/// what was found.
pub fn try_find_path(root: impl AsRef<Path>, pattern: &str) -> Result<PathBuf, FindPathError> {
    let root = root.as_ref();
    let mut matches = find_all(root, pattern)?;
    if matches.len() == 1 {
        return Ok(matches.remove(0));
    }
    Err(FindPathError::NotExactlyOne {
        root: root.to_path_buf(),
        pattern: pattern.to_string(),
        matches: PathList(matches),
    })
}

/// Like [`try_find_path`], but a match count other than one is a caller bug.
///
/// # Panics
///
/// Panics when zero or several paths match, with the count and matched paths
/// in the message. Invalid patterns are returned as errors.
pub fn find_path(root: impl AsRef<Path>, pattern: &str) -> Result<PathBuf, FindPathError> {
    match try_find_path(root, pattern) {
        Err(err @ FindPathError::NotExactlyOne { .. }) => panic!("{}", err),
        other => other,
    }
}
