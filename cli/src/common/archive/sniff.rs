//! # Archive Format Sniffing (`common::archive::sniff`)
//!
//! File: cli/src/common/archive/sniff.rs
//!
//! ## Overview
//!
//! Classifies a file as a tar, gzip-compressed tar or zip archive by looking at
//! its contents. File names and extensions are never consulted, so a zip renamed
//! to `release.tar` is still opened as a zip.
//!
//! ## Architecture
//!
//! Detection runs in a fixed order:
//!
//! 1. **Tar**: if the file starts with the gzip magic (`1f 8b`) the stream is
//!    decompressed first. The file is a tarball when the first member header
//!    parses with a valid checksum. An archive holding only the end-of-archive
//!    marker does not count.
//! 2. **Zip**: the file is a zip when `zip::ZipArchive` can locate and parse the
//!    central directory.
//!
//! A zip can never pass the tar check: its first block does not carry a valid
//! tar header checksum.
//!
use crate::core::error::{ArchiveResult, ZscopeError};
use flate2::read::GzDecoder;
use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufReader, Read, Seek};
use std::path::Path;
use tracing::debug;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Container formats zscope can open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    Tar,
    GzipTar,
    Zip,
}

impl ArchiveKind {
    /// True for both plain and gzip-compressed tarballs.
    pub fn is_tar(self) -> bool {
        matches!(self, ArchiveKind::Tar | ArchiveKind::GzipTar)
    }
}

impl fmt::Display for ArchiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ArchiveKind::Tar => "tar",
            ArchiveKind::GzipTar => "tar.gz",
            ArchiveKind::Zip => "zip",
        };
        f.write_str(label)
    }
}

/// # Detect Archive Kind (`detect`)
///
/// Classifies the file at `path` from its bytes. The extension is ignored.
/// Tar (plain or gzip-compressed) is tried first, then zip.
///
/// ## Arguments
///
/// * `path` - The file to inspect.
///
/// ## Returns
///
/// * `ArchiveResult<ArchiveKind>` - `Tar`, `GzipTar` or `Zip`.
///
/// ## Errors
///
/// - `ZscopeError::NotFound` if the path does not exist, is a directory, or cannot be opened.
/// - `ZscopeError::BadArchive` if the file is readable but is neither tar nor zip.
/// - `ZscopeError::Io` if rewinding the file fails between probes.
pub fn detect(path: &Path) -> ArchiveResult<ArchiveKind> {
    let mut file = open_archive_file(path)?;

    if let Some(kind) = probe_tar(&mut file)? {
        debug!("Sniffed {} as {}", path.display(), kind);
        return Ok(kind);
    }

    file.rewind()?;
    if probe_zip(file) {
        debug!("Sniffed {} as zip", path.display());
        return Ok(ArchiveKind::Zip);
    }

    debug!("{} matched no supported archive format", path.display());
    Err(ZscopeError::bad_archive(path, "not a tar, tar.gz or zip file"))
}

/// Opens `path` for reading, mapping every failure to `ZscopeError::NotFound`.
///
/// Directories are rejected here as well: they exist but cannot be read as a file.
pub(crate) fn open_archive_file(path: &Path) -> ArchiveResult<File> {
    let not_found = || ZscopeError::NotFound {
        path: path.to_path_buf(),
    };

    let metadata = fs::metadata(path).map_err(|e| {
        debug!("Cannot stat {}: {}", path.display(), e);
        not_found()
    })?;
    if metadata.is_dir() {
        debug!("{} is a directory", path.display());
        return Err(not_found());
    }

    File::open(path).map_err(|e| {
        debug!("Cannot open {}: {}", path.display(), e);
        not_found()
    })
}

/// Reports whether `reader` starts with the gzip magic, leaving it rewound to the start.
pub(crate) fn has_gzip_magic<R: Read + Seek>(reader: &mut R) -> io::Result<bool> {
    let mut magic = Vec::with_capacity(GZIP_MAGIC.len());
    reader
        .by_ref()
        .take(GZIP_MAGIC.len() as u64)
        .read_to_end(&mut magic)?;
    reader.rewind()?;
    Ok(magic == GZIP_MAGIC)
}

fn probe_tar(file: &mut File) -> io::Result<Option<ArchiveKind>> {
    let kind = if has_gzip_magic(file)? {
        ArchiveKind::GzipTar
    } else {
        ArchiveKind::Tar
    };

    let reader: Box<dyn Read + '_> = match kind {
        ArchiveKind::GzipTar => Box::new(GzDecoder::new(BufReader::new(&mut *file))),
        _ => Box::new(BufReader::new(&mut *file)),
    };

    Ok(first_member_parses(reader).then_some(kind))
}

fn first_member_parses<R: Read>(reader: R) -> bool {
    let mut archive = tar::Archive::new(reader);
    let Ok(mut entries) = archive.entries() else {
        return false;
    };
    match entries.next() {
        Some(Ok(_)) => true,
        Some(Err(e)) => {
            debug!("First tar header rejected: {}", e);
            false
        }
        None => false,
    }
}

fn probe_zip(file: File) -> bool {
    match zip::ZipArchive::new(BufReader::new(file)) {
        Ok(_) => true,
        Err(e) => {
            debug!("Zip central directory rejected: {}", e);
            false
        }
    }
}
