//! # zscope Filesystem I/O (`common::fs::io`)
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Small wrappers around `std::fs` used by the output sink and the
//! configuration loader. Each wrapper attaches the offending path to its error
//! through `anyhow::Context`.
//!
//! - **`ensure_dir_exists`**: `mkdir -p`, failing if the path exists as a non-directory.
//! - **`read_file_to_string`**: reads a whole file (used for TOML config files).
//! - **`write_string_to_file`**: writes an extracted entry verbatim, creating the
//!   parent directory first.
//!
//! ```rust
//! use crate::common::fs::io;
//!
//! # fn run(text: &str) -> crate::core::error::Result<()> {
//! io::write_string_to_file(std::path::Path::new("out/PKG-INFO"), text)?;
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{Result, ZscopeError};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Creates `path` and any missing parents.
///
/// # Errors
///
/// Returns `ZscopeError::FileSystem` if `path` exists but is not a directory,
/// or the underlying I/O error if creation fails.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(ZscopeError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire file at `path` into a string.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Writes `content` to `path` byte for byte, replacing any existing file.
///
/// An empty parent (a bare file name) means the current directory, which
/// always exists.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir_exists(parent)?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write to file {:?}", path))?;
    info!("Wrote {} bytes to {:?}", content.len(), path);
    Ok(())
}
