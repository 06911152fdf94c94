//! # zscope Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared building blocks used by the `view` command. Command logic lives in
//! `commands::`, error and configuration types in `core::`, and everything the
//! command composes lives here.
//!
//! ## Architecture
//!
//! - **`archive`**: the archive abstraction layer. Format sniffing, the tar and
//!   zip backends and the `Archive` facade.
//! - **`fs`**: output-side filesystem helpers (`write_string_to_file`, `output_path`).
//! - **`process`**: hands decoded text to an external pager.
//! - **`ui`**: the interactive entry picker.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::{archive, process};
//! use crate::common::archive::ArchiveBackend;
//!
//! # fn run(cfg: &crate::core::config::Config) -> crate::core::error::Result<()> {
//! let archive = archive::open(std::path::Path::new("dist/pkg-1.0.tar.gz"))?;
//! let text = archive.read("pkg-1.0/README.rst")?;
//! process::page(&text, &cfg.pager)?;
//! # Ok(())
//! # }
//! ```
//!

/// Archive format detection, backends and the `Archive` facade.
pub mod archive;
/// Filesystem helpers for writing extracted text.
pub mod fs;
/// Pager invocation and stdout fallback.
pub mod process;
/// Interactive terminal elements (the entry menu).
pub mod ui;
