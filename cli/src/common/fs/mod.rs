//! # zscope Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Filesystem helpers for the output side of zscope:
//!
//! - **`io`**: directory creation, whole-file reads and verbatim writes.
//! - **`paths`**: `output_path`, which turns `-o PATH` and a member name into
//!   the concrete destination file.
//!
//! ```rust
//! use crate::common::fs::{io, paths};
//!
//! # fn run(entry_name: &str, text: &str) -> crate::core::error::Result<()> {
//! let dest = paths::output_path(entry_name, std::path::Path::new("/tmp"));
//! io::write_string_to_file(&dest, text)?;
//! # Ok(())
//! # }
//! ```
//!

/// Basic file I/O (`ensure_dir_exists`, `read_file_to_string`, `write_string_to_file`).
pub mod io;
/// Destination path computation for extracted entries (`output_path`).
pub mod paths;
