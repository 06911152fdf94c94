//! # Entry Selection Menu (`common::ui::menu`)
//!
//! File: cli/src/common/ui/menu.rs
//!
//! Presents archive members in a `dialoguer` select list and reports which one
//! the user picked. Escape or `q` aborts the selection, which is reported as
//! `None` rather than an error.
//!
use crate::common::archive::ArchiveEntry;
use crate::core::config::MenuConfig;
use crate::core::error::{Result, ZscopeError};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;
use std::io::IsTerminal;
use tracing::debug;

/// Labels shown in the menu, each paired with the index of its entry in the listing.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct MenuItems {
    pub labels: Vec<String>,
    pub indices: Vec<usize>,
}

/// Builds menu rows from an archive listing, optionally leaving out directories.
pub fn menu_items(entries: &[ArchiveEntry], hide_directories: bool) -> MenuItems {
    let mut items = MenuItems::default();
    for (index, entry) in entries.iter().enumerate() {
        if hide_directories && entry.is_dir() {
            continue;
        }
        items.labels.push(entry.name().to_string());
        items.indices.push(index);
    }
    items
}

/// Shows `labels` as a select list on stderr and returns the chosen index.
///
/// Returns `None` if the user aborted. Index 0 is an ordinary selection.
///
/// # Errors
///
/// Returns `ZscopeError::Ui` when `labels` is empty, when stdin or stderr is
/// not a terminal, or when the terminal interaction itself fails.
pub fn select_index(labels: &[String], config: &MenuConfig) -> Result<Option<usize>> {
    if labels.is_empty() {
        anyhow::bail!(ZscopeError::Ui(
            "the archive has no entries to select".to_string()
        ));
    }
    if !std::io::stdin().is_terminal() || !std::io::stderr().is_terminal() {
        anyhow::bail!(ZscopeError::Ui(
            "interactive selection needs a terminal; use --entry NAME or --list".to_string()
        ));
    }

    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(config.prompt.as_str())
        .items(labels)
        .default(0)
        .max_length(config.max_length)
        .interact_opt()
        .map_err(|e| ZscopeError::Ui(e.to_string()))?;
    debug!("Menu selection: {:?}", choice);
    Ok(choice)
}

/// Lets the user pick one of `entries`, honouring `menu.hide_directories`.
pub fn select_entry<'a>(
    entries: &'a [ArchiveEntry],
    config: &MenuConfig,
) -> Result<Option<&'a ArchiveEntry>> {
    let items = menu_items(entries, config.hide_directories);
    let choice = select_index(&items.labels, config)?;
    Ok(choice.map(|row| &entries[items.indices[row]]))
}
