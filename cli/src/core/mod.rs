//! # zscope Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces shared by the archive layer and the command handler:
//!
//! - `config`: loading, merging and validation of `config.toml` / `.zscope.toml`
//! - `error`: the `ZscopeError` taxonomy and the `Result` aliases
//!
//! ```rust
//! use crate::core::config;
//! use crate::core::error::{Result, ZscopeError};
//! ```
//!
pub mod config;
pub mod error;
