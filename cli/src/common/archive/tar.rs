//! # zscope TAR Backend (`common::archive::tar`)
//!
//! File: cli/src/common/archive/tar.rs
//!
//! ## Overview
//!
//! Reads plain and gzip-compressed tarballs through the `ArchiveBackend`
//! contract. The caller never distinguishes the two: compression is sniffed
//! from the gzip magic every time the file is opened.
//!
//! ## Architecture
//!
//! The backend leverages the `tar` crate for walking member headers and the
//! `flate2` crate for Gzip decompression.
//!
//! - `TarBackend` holds only the archive path. Every `contents` or `read_bytes`
//!   call opens the file, walks the stream and closes it before returning, so
//!   no handle is shared between calls and the backend is `Send + Sync`.
//! - Member names come from `Entry::path_bytes`, which already folds in GNU long
//!   names and pax `path` records. Directory names lose their trailing `/`.
//! - When a name occurs more than once, the last occurrence wins, matching how
//!   `tar --append` shadows earlier members.
//! - Symlinks and hard links are followed to their target inside the same
//!   archive. Directories and device nodes have no data and are rejected.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::archive::{tar::TarBackend, ArchiveBackend, ArchiveKind};
//!
//! # fn main() -> crate::core::error::Result<()> {
//! let backend = TarBackend::new("dist/zless-22.1.dev0.tar.gz", ArchiveKind::GzipTar);
//! for entry in backend.contents()? {
//!     println!("{}", entry.name());
//! }
//! let pkg_info = backend.read("zless-22.1.dev0/PKG-INFO")?;
//! # Ok(())
//! # }
//! ```
//!
use super::entry::{ArchiveEntry, EntryKind, EntryRef};
use super::sniff::{self, ArchiveKind};
use super::ArchiveBackend;
use crate::core::error::{ArchiveResult, ZscopeError};
use flate2::read::GzDecoder;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tar::EntryType;
use tracing::debug;

/// Upper bound on link indirections followed by a single read.
const MAX_LINK_HOPS: usize = 8;

/// Tarball backend that reopens the container for every operation.
#[derive(Debug, Clone)]
pub struct TarBackend {
    path: PathBuf,
    kind: ArchiveKind,
}

/// What a lookup found for the requested member name.
enum Member {
    Data(Vec<u8>),
    Link(String),
    NoData,
}

/// How member names are compared during a lookup.
#[derive(Debug, Clone, Copy)]
enum Lookup {
    /// The name as the caller gave it.
    Exact,
    /// A link target; member names are normalized first, so `./pkg/a.txt` matches `pkg/a.txt`.
    Normalized,
}

impl TarBackend {
    /// # New TAR Backend (`TarBackend::new`)
    ///
    /// Wraps a path already sniffed as a tarball. Nothing is opened here; each
    /// later call opens the file itself, so this cannot fail.
    ///
    /// ## Arguments
    ///
    /// * `path` - The tarball on disk.
    /// * `kind` - `ArchiveKind::Tar` or `ArchiveKind::GzipTar`, as detected.
    ///
    /// ## Returns
    ///
    /// * `TarBackend` - A backend holding only `path` and `kind`.
    pub fn new(path: impl Into<PathBuf>, kind: ArchiveKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// Kind detected when the archive was opened.
    pub fn kind(&self) -> ArchiveKind {
        self.kind
    }

    /// Opens a fresh tar stream over the file, re-checking compression.
    ///
    /// The returned archive owns the file handle; dropping it closes the file.
    fn open(&self) -> ArchiveResult<tar::Archive<Box<dyn Read>>> {
        let mut file = sniff::open_archive_file(&self.path)?;
        let gzipped = sniff::has_gzip_magic(&mut file)?;
        debug!(
            "Opened {} for a tar pass (gzip: {})",
            self.path.display(),
            gzipped
        );
        let reader: Box<dyn Read> = if gzipped {
            Box::new(GzDecoder::new(BufReader::new(file)))
        } else {
            Box::new(BufReader::new(file))
        };
        Ok(tar::Archive::new(reader))
    }

    fn corrupt(&self, err: std::io::Error) -> ZscopeError {
        ZscopeError::bad_archive(&self.path, err.to_string())
    }

    /// Scans the whole stream for `name` and returns the last matching member.
    fn find(&self, name: &str, lookup: Lookup) -> ArchiveResult<Member> {
        let mut archive = self.open()?;
        let mut found = None;

        for entry in archive.entries().map_err(|e| self.corrupt(e))? {
            let mut entry = entry.map_err(|e| self.corrupt(e))?;
            let Some(listed) = describe(&entry) else {
                continue;
            };
            let matches = match lookup {
                Lookup::Exact => listed.name() == name,
                Lookup::Normalized => normalize(listed.name()) == name,
            };
            if !matches {
                continue;
            }

            found = Some(match listed.kind() {
                EntryKind::File => {
                    // The header size is untrusted; let the buffer grow with the data.
                    let mut data = Vec::new();
                    entry
                        .read_to_end(&mut data)
                        .map_err(|e| self.corrupt(e))?;
                    if data.len() as u64 != listed.size() {
                        return Err(ZscopeError::bad_archive(
                            &self.path,
                            format!(
                                "{} is truncated ({} of {} bytes)",
                                listed.name(),
                                data.len(),
                                listed.size()
                            ),
                        ));
                    }
                    Member::Data(data)
                }
                EntryKind::Symlink => match link_target(&entry) {
                    Some(target) => Member::Link(resolve_symlink(name, &target)),
                    None => Member::NoData,
                },
                EntryKind::Hardlink => match link_target(&entry) {
                    Some(target) => Member::Link(normalize(&target)),
                    None => Member::NoData,
                },
                EntryKind::Directory | EntryKind::Other => Member::NoData,
            });
        }

        found.ok_or_else(|| ZscopeError::EntryNotFound {
            archive: self.path.clone(),
            name: name.to_string(),
        })
    }
}

impl ArchiveBackend for TarBackend {
    fn path(&self) -> &Path {
        &self.path
    }

    fn contents(&self) -> ArchiveResult<Vec<ArchiveEntry>> {
        let mut archive = self.open()?;
        let mut entries = Vec::new();
        for entry in archive.entries().map_err(|e| self.corrupt(e))? {
            let entry = entry.map_err(|e| self.corrupt(e))?;
            if let Some(listed) = describe(&entry) {
                entries.push(listed);
            }
        }

        // A file rewritten since it was sniffed may no longer hold any members.
        if entries.is_empty() {
            return Err(ZscopeError::bad_archive(&self.path, "tarball has no members"));
        }
        debug!("Listed {} tar members in {}", entries.len(), self.path.display());
        Ok(entries)
    }

    fn read_bytes<'a>(&self, entry: impl Into<EntryRef<'a>>) -> ArchiveResult<Vec<u8>> {
        let requested = entry.into().name();
        let mut name = requested.to_string();
        let mut lookup = Lookup::Exact;

        for _ in 0..=MAX_LINK_HOPS {
            match self.find(&name, lookup)? {
                Member::Data(data) => return Ok(data),
                Member::Link(target) => {
                    debug!("Following tar link {} -> {}", name, target);
                    name = target;
                    lookup = Lookup::Normalized;
                }
                Member::NoData => return Err(ZscopeError::NotAFile { name }),
            }
        }

        Err(ZscopeError::bad_archive(
            &self.path,
            format!("too many levels of links resolving {requested}"),
        ))
    }
}

/// Converts a tar member into an `ArchiveEntry`, skipping pax global headers.
fn describe<R: Read>(entry: &tar::Entry<'_, R>) -> Option<ArchiveEntry> {
    let kind = match entry.header().entry_type() {
        EntryType::XGlobalHeader => return None,
        EntryType::Regular | EntryType::Continuous | EntryType::GNUSparse => EntryKind::File,
        EntryType::Directory => EntryKind::Directory,
        EntryType::Symlink => EntryKind::Symlink,
        EntryType::Link => EntryKind::Hardlink,
        _ => EntryKind::Other,
    };

    let raw = String::from_utf8_lossy(&entry.path_bytes()).into_owned();
    let name = match kind {
        EntryKind::Directory if raw.len() > 1 => raw.trim_end_matches('/').to_string(),
        _ => raw,
    };

    Some(ArchiveEntry::new(name, kind, entry.size()))
}

fn link_target<R: Read>(entry: &tar::Entry<'_, R>) -> Option<String> {
    entry
        .link_name_bytes()
        .map(|target| String::from_utf8_lossy(&target).into_owned())
}

/// Symlink targets are relative to the directory holding the link.
fn resolve_symlink(link_name: &str, target: &str) -> String {
    let parent = link_name.rsplit_once('/').map_or("", |(dir, _)| dir);
    normalize(&format!("{parent}/{target}"))
}

/// Collapses `.`, `..` and repeated separators in an archive-relative path.
fn normalize(path: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            _ => parts.push(part),
        }
    }
    parts.join("/")
}
