//! # zscope Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error taxonomy shared by the archive layer and the
//! command handlers. Archive operations return a typed [`ZscopeError`] so callers
//! can tell a missing file from a file that is not an archive, or a missing
//! member from a member that is not text. The application layer wraps these in
//! `anyhow::Error` and `main` downcasts them again to pick the exit message.
//!
//! ## Architecture
//!
//! - `ZscopeError`: a `thiserror` enum covering archive, filesystem, config and UI failures.
//! - `ArchiveResult<T>`: `std::result::Result<T, ZscopeError>`, used by `common::archive`.
//! - `Result<T>`: `anyhow::Result<T>`, used everywhere else.
//!
//! ## Examples
//!
//! ```rust
//! let archive = archive::open(&path)?; // ZscopeError converts into anyhow::Error
//!
//! match archive.read("missing.txt") {
//!     Err(ZscopeError::EntryNotFound { name, .. }) => println!("no member {name}"),
//!     Err(e) => return Err(e.into()),
//!     Ok(text) => println!("{text}"),
//! }
//! ```
//!
use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Custom error type for zscope.
#[derive(Error, Debug)]
pub enum ZscopeError {
    #[error("No such file: '{}'", path.display())]
    NotFound { path: PathBuf },

    #[error("Could not open archive: {} ({reason})", path.display())]
    BadArchive { path: PathBuf, reason: String },

    #[error("{} has no entry: {name}", archive.display())]
    EntryNotFound { archive: PathBuf, name: String },

    #[error("Entry '{name}' is not a regular file")]
    NotAFile { name: String },

    #[error("Entry '{name}' is not valid UTF-8 text: {source}")]
    Decode {
        name: String,
        #[source]
        source: FromUtf8Error,
    },

    #[error("I/O error while reading archive: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Menu error: {0}")]
    Ui(String),

    #[error("Pager error: {0}")]
    Pager(String),
}

impl ZscopeError {
    /// Builds a `BadArchive` for `path` with a short reason.
    pub fn bad_archive(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        ZscopeError::BadArchive {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for failures caused by looking up a member name that the archive does not hold.
    pub fn is_lookup_failure(&self) -> bool {
        matches!(self, ZscopeError::EntryNotFound { .. })
    }
}

/// Result type returned by the archive layer.
pub type ArchiveResult<T> = std::result::Result<T, ZscopeError>;

/// Type alias for Result using anyhow::Error for the application layer.
pub type Result<T> = anyhow::Result<T>;
