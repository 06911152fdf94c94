//! # zscope View Handler
//!
//! File: cli/src/commands/view.rs
//!
//! ## Overview
//!
//! This module implements zscope's single command: open an archive, let the
//! user choose one member, decode it as UTF-8 and either page it or save it.
//!
//! ## Architecture
//!
//! 1. Open the archive through `common::archive::open`, which sniffs the format.
//! 2. Load configuration (`core::config::load_config`).
//! 3. With `--list`, print every member name in archive order and stop.
//! 4. Pick the member: `--entry NAME` if given, otherwise the interactive menu.
//!    Aborting the menu ends the command successfully without output.
//! 5. Read the member as text.
//! 6. With `--output PATH`, write the text to `PATH` (or to `PATH/<basename>`
//!    when `PATH` is an existing directory). Otherwise hand it to the pager.
//!
//! ## Usage
//!
//! ```bash
//! # Choose a file interactively and page it
//! zscope dist/zless-22.1.dev0.tar.gz
//!
//! # Save one member without the menu
//! zscope dist/pkg.zip -e pkg/README.rst -o /tmp
//!
//! # List members
//! zscope dist/pkg.zip --list
//! ```
//!
use crate::{
    common::{
        archive::{self, ArchiveBackend, EntryRef},
        fs::{io, paths},
        process, ui,
    },
    core::{config, error::Result},
};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// # View Arguments (`ViewArgs`)
///
/// Command-line arguments for browsing one archive.
#[derive(Parser, Debug)]
pub struct ViewArgs {
    /// Archive to browse (tar, tar.gz or zip).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Write the selected entry to PATH instead of paging it.
    /// If PATH is an existing directory, the entry's base name is used inside it.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the names of all entries and exit.
    #[arg(short, long, conflicts_with_all = ["output", "entry"])]
    pub list: bool,

    /// Select the entry by name instead of showing the menu.
    #[arg(short, long, value_name = "NAME")]
    pub entry: Option<String>,

    /// Write the entry to stdout even when it is a terminal.
    #[arg(long)]
    pub no_pager: bool,

    /// Use this configuration file instead of the user config file.
    #[arg(long, value_name = "PATH", env = "ZSCOPE_CONFIG")]
    pub config: Option<PathBuf>,
}

/// # Handle View Command (`handle_view`)
///
/// Runs the open, select, read and display flow described in the module docs.
///
/// ## Returns
///
/// * `Ok(())` on success, including when the user aborts the menu.
/// * `Err` wrapping a `ZscopeError` for missing files, unreadable archives,
///   unknown or non-text entries, and menu or pager failures.
pub fn handle_view(args: ViewArgs) -> Result<()> {
    info!("Viewing archive {}", args.file.display());

    let archive = archive::open(&args.file)?;
    let mut cfg = config::load_config(args.config.as_deref())?;
    if args.no_pager {
        cfg.pager.enabled = false;
    }

    let entries = archive.contents()?;
    debug!(
        "{} ({}) has {} entries",
        args.file.display(),
        archive.kind(),
        entries.len()
    );

    if args.list {
        return process::write_stdout(&listing(&entries));
    }

    let selected: EntryRef<'_> = match args.entry.as_deref() {
        Some(name) => EntryRef::Name(name),
        None => match ui::menu::select_entry(&entries, &cfg.menu)? {
            Some(entry) => EntryRef::Entry(entry),
            None => {
                info!("Selection aborted.");
                return Ok(());
            }
        },
    };

    let text = archive.read(selected).inspect_err(|e| {
        if e.is_lookup_failure() {
            warn!("Run `zscope {} --list` to see entry names.", args.file.display());
        }
    })?;
    // The archive is no longer needed once the text is in memory.
    archive.close();

    match &args.output {
        Some(dest) => {
            let path = paths::output_path(selected.name(), dest);
            io::write_string_to_file(&path, &text)?;
            info!("Wrote {} to {}", selected.name(), path.display());
            Ok(())
        }
        None => process::page(&text, &cfg.pager),
    }
}

/// One member name per line, in archive order.
fn listing(entries: &[archive::ArchiveEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(entry.name());
        out.push('\n');
    }
    out
}
