//! # zscope ZIP Backend (`common::archive::zip`)
//!
//! File: cli/src/common/archive/zip.rs
//!
//! ## Overview
//!
//! Reads zip archives through the `ArchiveBackend` contract using the `zip`
//! crate. Unlike the tar backend, the container is opened once when the archive
//! is constructed and the same handle serves every later call.
//!
//! ## Architecture
//!
//! - The handle (`zip::ZipArchive` over a buffered `File`) lives behind a
//!   `Mutex`. The handle carries a read position, so calls from several threads
//!   are serialized rather than interleaved.
//! - Listing walks the central directory by index, which preserves its stored
//!   order. `by_index_raw` is used so listing never decompresses anything.
//! - The handle is released exactly once: when the backend is dropped, or
//!   earlier through `close`, which consumes the backend.
//!
use super::entry::{ArchiveEntry, EntryKind, EntryRef};
use super::sniff;
use super::ArchiveBackend;
use crate::core::error::{ArchiveResult, ZscopeError};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;
use zip::result::ZipError;
use zip::ZipArchive;

type Handle = ZipArchive<BufReader<File>>;

/// Zip backend holding one open container handle for its whole lifetime.
pub struct ZipBackend {
    path: PathBuf,
    handle: Mutex<Handle>,
}

impl ZipBackend {
    /// # Open ZIP Backend (`ZipBackend::open`)
    ///
    /// Opens the zip at `path`, parses its central directory and keeps the
    /// handle until the backend is closed or dropped. If parsing fails the
    /// handle is dropped before returning.
    ///
    /// ## Arguments
    ///
    /// * `path` - The zip file on disk.
    ///
    /// ## Returns
    ///
    /// * `ArchiveResult<ZipBackend>` - The backend owning the open handle.
    ///
    /// ## Errors
    ///
    /// - `ZscopeError::NotFound` if the file cannot be opened.
    /// - `ZscopeError::BadArchive` if the central directory cannot be parsed.
    pub fn open(path: impl Into<PathBuf>) -> ArchiveResult<Self> {
        let path = path.into();
        let file = sniff::open_archive_file(&path)?;
        let handle = ZipArchive::new(BufReader::new(file))
            .map_err(|e| ZscopeError::bad_archive(&path, e.to_string()))?;
        debug!(
            "Holding zip handle for {} ({} entries)",
            path.display(),
            handle.len()
        );
        Ok(Self {
            path,
            handle: Mutex::new(handle),
        })
    }

    /// # Close ZIP Backend (`ZipBackend::close`)
    ///
    /// Releases the container handle now instead of at end of scope. Consuming
    /// `self` means the backend cannot be used afterwards.
    pub fn close(self) {
        drop(self);
    }

    // Poisoning is ignored: each call starts a fresh entry lookup.
    fn handle(&self) -> MutexGuard<'_, Handle> {
        self.handle.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn extraction_error(&self, name: &str, err: ZipError) -> ZscopeError {
        match err {
            ZipError::FileNotFound => ZscopeError::EntryNotFound {
                archive: self.path.clone(),
                name: name.to_string(),
            },
            other => ZscopeError::bad_archive(&self.path, format!("{name}: {other}")),
        }
    }
}

impl Drop for ZipBackend {
    fn drop(&mut self) {
        debug!("Released zip handle for {}", self.path.display());
    }
}

impl fmt::Debug for ZipBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZipBackend")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl ArchiveBackend for ZipBackend {
    fn path(&self) -> &Path {
        &self.path
    }

    fn contents(&self) -> ArchiveResult<Vec<ArchiveEntry>> {
        let mut zip = self.handle();
        let mut entries = Vec::with_capacity(zip.len());
        for index in 0..zip.len() {
            let file = zip
                .by_index_raw(index)
                .map_err(|e| ZscopeError::bad_archive(&self.path, e.to_string()))?;
            let kind = if file.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            entries.push(ArchiveEntry::new(file.name(), kind, file.size()));
        }
        Ok(entries)
    }

    fn read_bytes<'a>(&self, entry: impl Into<EntryRef<'a>>) -> ArchiveResult<Vec<u8>> {
        let name = entry.into().name();
        let mut zip = self.handle();
        let mut file = zip
            .by_name(name)
            .map_err(|e| self.extraction_error(name, e))?;
        if file.is_dir() {
            return Err(ZscopeError::NotAFile {
                name: name.to_string(),
            });
        }

        // The central directory size is untrusted; let the buffer grow with the data.
        let mut data = Vec::new();
        file.read_to_end(&mut data)
            .map_err(|e| ZscopeError::bad_archive(&self.path, format!("{name}: {e}")))?;
        Ok(data)
    }
}
