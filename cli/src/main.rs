//! # zscope Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! Entry point for the zscope CLI. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Running the view command and mapping its errors to an exit status
//!
//! ## Examples
//!
//! ```bash
//! # Pick an entry from a source distribution and page it
//! zscope dist/zless-22.1.dev0.tar.gz
//!
//! # Same, with debug logging on stderr
//! zscope -vv dist/zless-22.1.dev0.tar.gz
//! ```
//!
//! Exit status is 0 on success or when the menu is aborted, and 1 on any error.
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // The view command.
mod common; // Archive layer, filesystem, pager and menu utilities.
mod core; // Errors and configuration.

use crate::core::error::ZscopeError;

#[derive(Parser, Debug)]
#[command(
    name = "zscope",
    about = "Browse tar, tar.gz and zip archives and page through their text entries",
    long_about = "Opens an archive, shows a menu of its entries and pages the selected one.\n\
                  Use --entry to skip the menu and --output to save the entry instead.",
    version
)]
struct Cli {
    #[command(flatten)]
    view: commands::view::ViewArgs,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = commands::view::handle_view(cli.view) {
        tracing::error!("Command execution failed: {:?}", e);
        match e.downcast_ref::<ZscopeError>() {
            // Archive errors carry their own wording.
            Some(err) => eprintln!("{}", err),
            None => eprintln!("Error: {:#}", e),
        }
        std::process::exit(1);
    }

    Ok(())
}
