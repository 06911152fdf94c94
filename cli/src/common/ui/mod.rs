//! # zscope UI Utilities (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Terminal interaction for zscope. The only interactive element is the entry
//! picker in `menu`, built on `dialoguer`. It draws on stderr so that stdout
//! stays free for the entry text.
//!

/// The interactive picker (`select_index`, `select_entry`) and its row builder (`menu_items`).
pub mod menu;
