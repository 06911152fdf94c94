//! # Archive Entry Descriptors (`common::archive::entry`)
//!
//! File: cli/src/common/archive/entry.rs
//!
//! ## Overview
//!
//! Every backend lists its members as [`ArchiveEntry`] values and resolves
//! lookups through [`EntryRef`]. The entry's `name` is the only lookup key;
//! `kind` and `size` are carried along for display and for refusing to read
//! members that have no data stream.
//!
//! Callers may pass either a bare name or a previously listed entry wherever an
//! entry is expected:
//!
//! ```rust
//! let entries = archive.contents()?;
//! let by_entry = archive.read_bytes(&entries[0])?;
//! let by_name = archive.read_bytes(entries[0].name())?;
//! assert_eq!(by_entry, by_name);
//! ```
//!

/// Kind of member stored in an archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Symlink,
    Hardlink,
    Other,
}

/// Uniform descriptor for one member of a tar or zip archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    name: String,
    kind: EntryKind,
    size: u64,
}

impl ArchiveEntry {
    pub(crate) fn new(name: impl Into<String>, kind: EntryKind, size: u64) -> Self {
        Self {
            name: name.into(),
            kind,
            size,
        }
    }

    /// Slash-separated path of the member inside the archive.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Uncompressed size in bytes as recorded by the archive.
    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// A reference to an archive member, either by name or by a listed entry.
#[derive(Debug, Clone, Copy)]
pub enum EntryRef<'a> {
    Name(&'a str),
    Entry(&'a ArchiveEntry),
}

impl<'a> EntryRef<'a> {
    /// The lookup key both variants resolve to.
    pub fn name(&self) -> &'a str {
        match self {
            EntryRef::Name(name) => name,
            EntryRef::Entry(entry) => entry.name(),
        }
    }
}

impl<'a> From<&'a str> for EntryRef<'a> {
    fn from(name: &'a str) -> Self {
        EntryRef::Name(name)
    }
}

impl<'a> From<&'a String> for EntryRef<'a> {
    fn from(name: &'a String) -> Self {
        EntryRef::Name(name.as_str())
    }
}

impl<'a> From<&'a ArchiveEntry> for EntryRef<'a> {
    fn from(entry: &'a ArchiveEntry) -> Self {
        EntryRef::Entry(entry)
    }
}
