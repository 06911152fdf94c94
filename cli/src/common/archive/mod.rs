//! # zscope Archive Layer (`common::archive`)
//!
//! File: cli/src/common/archive/mod.rs
//!
//! ## Overview
//!
//! This module is the uniform interface over the archive formats zscope can
//! browse. Whatever the container, callers list members with `contents`, pick
//! one, and fetch it with `read` (UTF-8 text) or `read_bytes` (raw data).
//!
//! ## Architecture
//!
//! - **`sniff`**: Decides between tar, gzip-compressed tar and zip from the file's bytes.
//! - **`entry`**: `ArchiveEntry` descriptors and the `EntryRef` name-or-entry reference.
//! - **`tar`**: `TarBackend`, which reopens the file for every call.
//! - **`zip`**: `ZipBackend`, which holds one handle for its lifetime.
//!
//! `Archive` is a closed enum over the two backends, built by [`Archive::open`]
//! (also exposed as [`open`]). Both the enum and the backends implement the
//! [`ArchiveBackend`] capability trait, so code written against one works
//! against all of them.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::archive::{self, ArchiveBackend};
//!
//! # fn run() -> crate::core::error::Result<()> {
//! let archive = archive::open("dist/zless-22.1.dev0.tar.gz")?;
//! let entries = archive.contents()?;
//! let text = archive.read(&entries[0])?;
//! println!("{text}");
//! # Ok(())
//! # }
//! ```
//!
pub mod entry;
pub mod sniff;
pub mod tar;
#[cfg(test)]
pub(crate) mod test_fixtures;
pub mod zip;

pub use self::entry::{ArchiveEntry, EntryKind, EntryRef};
pub use self::sniff::ArchiveKind;
use self::tar::TarBackend;
use self::zip::ZipBackend;
use crate::core::error::{ArchiveResult, ZscopeError};
use std::path::Path;
use tracing::info;

/// Operations every archive format provides.
pub trait ArchiveBackend {
    /// Path of the container on disk.
    fn path(&self) -> &Path;

    /// Lists every member in the archive's native order. Never cached.
    fn contents(&self) -> ArchiveResult<Vec<ArchiveEntry>>;

    /// Returns the raw bytes of the member named by `entry`.
    fn read_bytes<'a>(&self, entry: impl Into<EntryRef<'a>>) -> ArchiveResult<Vec<u8>>;

    /// Returns the member named by `entry` decoded as UTF-8.
    ///
    /// Fails with `ZscopeError::Decode` for anything that is not valid UTF-8.
    fn read<'a>(&self, entry: impl Into<EntryRef<'a>>) -> ArchiveResult<String> {
        let entry = entry.into();
        let bytes = self.read_bytes(entry)?;
        String::from_utf8(bytes).map_err(|source| ZscopeError::Decode {
            name: entry.name().to_string(),
            source,
        })
    }
}

/// An open archive of any supported kind.
#[derive(Debug)]
pub enum Archive {
    Tar(TarBackend),
    Zip(ZipBackend),
}

impl Archive {
    /// # Open Archive (`Archive::open`)
    ///
    /// Sniffs the file at `path` and wraps it in the matching backend. Tarballs
    /// keep only the path; zips are opened here and hold their handle.
    ///
    /// ## Arguments
    ///
    /// * `path` - The archive on disk.
    ///
    /// ## Returns
    ///
    /// * `ArchiveResult<Archive>` - `Archive::Tar` or `Archive::Zip`.
    ///
    /// ## Errors
    ///
    /// - `ZscopeError::NotFound` if the path does not exist or cannot be opened.
    /// - `ZscopeError::BadArchive` if the file is neither a tarball nor a zip.
    pub fn open(path: impl AsRef<Path>) -> ArchiveResult<Self> {
        let path = path.as_ref();
        let kind = sniff::detect(path)?;
        let archive = if kind.is_tar() {
            Archive::Tar(TarBackend::new(path, kind))
        } else {
            Archive::Zip(ZipBackend::open(path)?)
        };
        info!("Opened {} as {}", path.display(), kind);
        Ok(archive)
    }

    /// Container kind detected at open time.
    pub fn kind(&self) -> ArchiveKind {
        match self {
            Archive::Tar(tar) => tar.kind(),
            Archive::Zip(_) => ArchiveKind::Zip,
        }
    }

    /// Releases any held container handle. Dropping the archive does the same.
    pub fn close(self) {
        match self {
            Archive::Tar(_) => {}
            Archive::Zip(zip) => zip.close(),
        }
    }
}

impl ArchiveBackend for Archive {
    fn path(&self) -> &Path {
        match self {
            Archive::Tar(tar) => tar.path(),
            Archive::Zip(zip) => zip.path(),
        }
    }

    fn contents(&self) -> ArchiveResult<Vec<ArchiveEntry>> {
        match self {
            Archive::Tar(tar) => tar.contents(),
            Archive::Zip(zip) => zip.contents(),
        }
    }

    fn read_bytes<'a>(&self, entry: impl Into<EntryRef<'a>>) -> ArchiveResult<Vec<u8>> {
        match self {
            Archive::Tar(tar) => tar.read_bytes(entry),
            Archive::Zip(zip) => zip.read_bytes(entry),
        }
    }
}

/// # Open Archive (`open`)
///
/// Factory for the archive layer; the same as [`Archive::open`].
///
/// ## Arguments
///
/// * `path` - The archive on disk.
///
/// ## Returns
///
/// * `ArchiveResult<Archive>` - The opened archive.
///
/// ## Errors
///
/// See [`Archive::open`]: `NotFound` for missing paths, `BadArchive` for unrecognised files.
pub fn open(path: impl AsRef<Path>) -> ArchiveResult<Archive> {
    Archive::open(path)
}
