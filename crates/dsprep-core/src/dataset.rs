//! Idempotent dataset fetch-and-unpack.
//!
//! Layout under the dataset root:
//!
//! - `<root>/<file_name>`: the downloaded archive, kept after unpacking.
//! - `<root>/<dataset_name>/`: the unpacked contents.
//!
//! Extraction goes into a hidden staging directory inside the root that is
//! renamed onto `<root>/<dataset_name>` only once unpacking succeeded, so the
//! "directory exists" shortcut never sees a half-extracted dataset.

use crate::archive::unpack_archive;
use crate::download::{download_to, FetchOptions};
use crate::error::DatasetError;
use crate::paths::expand_home;
use crate::url_model::{dataset_name, derive_filename};
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

/// Downloads and unpacks the dataset at `url` under `root` with default
/// transfer options. See [`prepare_dataset_with`].
pub fn prepare_dataset(url: &str, root: impl AsRef<Path>) -> Result<PathBuf, DatasetError> {
    prepare_dataset_with(url, root, &FetchOptions::default())
}

/// Ensures an unpacked copy of the dataset at `url` exists under `root` and
/// returns its directory.
///
/// - If `<root>/<dataset_name>` already exists it is returned as-is; its
///   contents are not checked.
/// - If only the archive is present, it is unpacked without re-downloading.
/// - Otherwise the archive is downloaded, then unpacked.
pub fn prepare_dataset_with(
    url: &str,
    root: impl AsRef<Path>,
    opts: &FetchOptions,
) -> Result<PathBuf, DatasetError> {
    let root = expand_home(root.as_ref());
    fs::create_dir_all(&root)?;

    let parsed = Url::parse(url).map_err(|source| DatasetError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;
    let file_name = derive_filename(&parsed);
    let out_path = root.join(dataset_name(&file_name));

    if out_path.exists() {
        tracing::info!("{} exists, skipping", out_path.display());
        return Ok(out_path);
    }

    let file_path = root.join(&file_name);
    if !file_path.exists() {
        tracing::info!("downloading dataset from {} to {}", url, file_path.display());
        download_to(url, &file_path, opts)?;
    } else {
        tracing::info!("{} exists, skipping", file_path.display());
    }

    tracing::info!("unpacking {} to {}", file_path.display(), out_path.display());
    unpack_staged(&file_path, &root, &out_path)?;

    Ok(out_path)
}

fn unpack_staged(archive: &Path, root: &Path, out_path: &Path) -> Result<(), DatasetError> {
    let prefix = match out_path.file_name() {
        Some(name) => format!(".{}-", name.to_string_lossy()),
        None => ".dsprep-".to_string(),
    };
    let staging = tempfile::Builder::new().prefix(&prefix).tempdir_in(root)?;
    unpack_archive(archive, staging.path())?;

    // Temp dirs are created 0700; the dataset dir should look like a plain mkdir.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(staging.path(), fs::Permissions::from_mode(0o755))?;
    }
    fs::rename(staging.path(), out_path)?;
    Ok(())
}
