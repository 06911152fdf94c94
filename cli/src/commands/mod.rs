//! # zscope Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! zscope has a single command, so `main.rs` flattens `view::ViewArgs` into its
//! top-level arguments and calls `view::handle_view` directly.
//!

/// Archive browsing: list, select, read, page or save.
pub mod view;
