//! # zscope Pager Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//!
//! ## Overview
//!
//! Displays decoded entry text. When stdout is a terminal and paging is
//! enabled, the text is piped into an external pager; otherwise it is written
//! to stdout unchanged so that `zscope FILE -e NAME | grep ...` works.
//!
//! ## Architecture
//!
//! The pager command is chosen in this order:
//! 1. `pager.command` from the configuration.
//! 2. The `PAGER` environment variable.
//! 3. `less`.
//!
//! The command line is split on whitespace; no shell is involved. A pager
//! that cannot be started is not fatal: zscope logs a warning and falls back
//! to stdout. A pager that quits before reading everything (for example `q`
//! in `less`) closes the pipe, which is treated as success.
//!
use crate::core::config::PagerConfig;
use crate::core::error::{Result, ZscopeError};
use anyhow::Context;
use std::io::{self, IsTerminal, Write};
use std::process::{Command, Stdio};
use tracing::{debug, info, warn};

const DEFAULT_PAGER: &str = "less";

/// Shows `text` through the configured pager, or on stdout when paging does not apply.
///
/// # Errors
///
/// Returns `ZscopeError::Pager` if the pager exits with a failure status, or an
/// I/O error if writing to the pager or stdout fails for a reason other than
/// a closed pipe.
pub fn page(text: &str, config: &PagerConfig) -> Result<()> {
    if !config.enabled {
        debug!("Paging disabled, writing to stdout.");
        return write_stdout(text);
    }
    if !io::stdout().is_terminal() {
        debug!("stdout is not a terminal, writing to stdout.");
        return write_stdout(text);
    }
    let command = pager_command(config.command.as_deref(), std::env::var("PAGER").ok());
    run_pager(&command, text)
}

/// Writes `text` to stdout, treating a closed pipe as success.
pub fn write_stdout(text: &str) -> Result<()> {
    let mut out = io::stdout().lock();
    match out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("stdout closed early.");
            Ok(())
        }
        other => other.context("Failed to write to stdout"),
    }
}

/// Picks the pager command line from config, then `$PAGER`, then the default.
fn pager_command(configured: Option<&str>, env_pager: Option<String>) -> String {
    configured
        .map(str::to_string)
        .or_else(|| env_pager.filter(|p| !p.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_PAGER.to_string())
}

fn run_pager(command: &str, text: &str) -> Result<()> {
    let mut parts = command.split_whitespace();
    let Some(program) = parts.next() else {
        return write_stdout(text);
    };
    info!("Starting pager: {}", command);

    let mut child = match Command::new(program)
        .args(parts)
        .stdin(Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(e) => {
            warn!("Could not start pager '{}': {}. Writing to stdout.", command, e);
            return write_stdout(text);
        }
    };

    if let Some(mut stdin) = child.stdin.take() {
        if let Err(e) = stdin.write_all(text.as_bytes()) {
            if e.kind() != io::ErrorKind::BrokenPipe {
                return Err(e).context("Failed to write to pager");
            }
            debug!("Pager closed its input early.");
        }
    }

    let status = child.wait().context("Failed to wait for pager")?;
    if !status.success() {
        anyhow::bail!(ZscopeError::Pager(format!(
            "'{}' exited with {}",
            command, status
        )));
    }
    Ok(())
}
