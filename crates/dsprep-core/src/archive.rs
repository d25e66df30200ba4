//! Archive format sniffing (by file suffix) and extraction.

use crate::error::DatasetError;
use bzip2::read::BzDecoder;
use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::Path;
use xz2::read::XzDecoder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    Zip,
    Tar,
    TarGz,
    TarBz2,
    TarXz,
}

impl ArchiveFormat {
    /// Infers the format from the file name suffix (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?.to_ascii_lowercase();
        if name.ends_with(".zip") {
            Some(ArchiveFormat::Zip)
        } else if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
            Some(ArchiveFormat::TarGz)
        } else if name.ends_with(".tar.bz2") || name.ends_with(".tbz2") || name.ends_with(".tbz") {
            Some(ArchiveFormat::TarBz2)
        } else if name.ends_with(".tar.xz") || name.ends_with(".txz") {
            Some(ArchiveFormat::TarXz)
        } else if name.ends_with(".tar") {
            Some(ArchiveFormat::Tar)
        } else {
            None
        }
    }
}

/// Extracts `archive` into `extract_dir`, creating the directory if needed.
///
/// Entries whose paths would land outside `extract_dir` are skipped.
pub fn unpack_archive(archive: &Path, extract_dir: &Path) -> Result<(), DatasetError> {
    let format = ArchiveFormat::from_path(archive)
        .ok_or_else(|| DatasetError::UnsupportedArchive(archive.to_path_buf()))?;

    fs::create_dir_all(extract_dir)?;
    let file = BufReader::new(File::open(archive)?);
    match format {
        ArchiveFormat::Zip => {
            let mut zip = zip::ZipArchive::new(file)?;
            zip.extract(extract_dir)?;
        }
        ArchiveFormat::Tar => unpack_tar(file, extract_dir)?,
        ArchiveFormat::TarGz => unpack_tar(GzDecoder::new(file), extract_dir)?,
        ArchiveFormat::TarBz2 => unpack_tar(BzDecoder::new(file), extract_dir)?,
        ArchiveFormat::TarXz => unpack_tar(XzDecoder::new(file), extract_dir)?,
    }
    tracing::debug!("unpacked {:?} archive {}", format, archive.display());
    Ok(())
}

fn unpack_tar<R: Read>(reader: R, extract_dir: &Path) -> std::io::Result<()> {
    tar::Archive::new(reader).unpack(extract_dir)
}
