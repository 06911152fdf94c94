//! # zscope Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! Loads the optional settings that shape the viewer: which pager to run and
//! how the selection menu looks. Every setting has a default, so zscope runs
//! without any configuration file at all.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.zscope.toml` in the current directory or an ancestor
//!    (the search stops at the first directory containing `.git`).
//! 2. The user file: the path given by `--config` / `ZSCOPE_CONFIG`, otherwise
//!    `config.toml` in the platform config directory
//!    (`~/.config/zscope/config.toml` on Linux).
//! 3. Default values defined in the code.
//!
//! After merging, `~` in the pager command is expanded and the result is validated.
//!
//! ## Examples
//!
//! ```toml
//! [pager]
//! command = "less -R"
//! enabled = true
//!
//! [menu]
//! prompt = "Pick a file"
//! max_length = 25
//! hide_directories = true
//! ```
//!
//! ```rust
//! let cfg = config::load_config(None)?;
//! let rows = cfg.menu.max_length;
//! ```
//!
use crate::common::fs::io::read_file_to_string;
use crate::core::error::{Result, ZscopeError};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Top-level configuration loaded from TOML.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub pager: PagerConfig,
    #[serde(default)]
    pub menu: MenuConfig,
}

/// How decoded entries are displayed when no `--output` is given.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PagerConfig {
    /// Pager command line. Falls back to `$PAGER`, then `less`.
    #[serde(default)]
    pub command: Option<String>,
    /// When false, text is written straight to stdout.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// Appearance of the interactive entry menu.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MenuConfig {
    #[serde(default = "default_menu_prompt")]
    pub prompt: String,
    /// Number of rows visible at once.
    #[serde(default = "default_menu_max_length")]
    pub max_length: usize,
    /// Leave directory members out of the menu (they cannot be read).
    #[serde(default = "default_true")]
    pub hide_directories: bool,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            command: None,
            enabled: default_true(),
        }
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            prompt: default_menu_prompt(),
            max_length: default_menu_max_length(),
            hide_directories: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_menu_prompt() -> String {
    "Select an entry".to_string()
}
fn default_menu_max_length() -> usize {
    20
}

const PROJECT_CONFIG_FILENAME: &str = ".zscope.toml";

/// Loads, merges, expands and validates configuration.
///
/// `user_config_override` replaces the platform user config file; unlike the
/// default location it must exist.
pub fn load_config(user_config_override: Option<&Path>) -> Result<Config> {
    let user_config = match user_config_override {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            Some(load_config_from_path(path)?)
        }
        None => load_user_config()?,
    };
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let project_config = match find_project_config_path(&current_dir) {
        Some(path) => {
            info!("Loading project configuration from: {}", path.display());
            Some(load_config_from_path(&path)?)
        }
        None => {
            debug!("No {} found in current directory or ancestors.", PROJECT_CONFIG_FILENAME);
            None
        }
    };

    let mut merged = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged);
    validate_config(&merged).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged);
    Ok(merged)
}

fn load_user_config() -> Result<Option<Config>> {
    let Some(proj_dirs) = ProjectDirs::from("", "", "zscope") else {
        warn!("Could not determine user config directory.");
        return Ok(None);
    };
    let config_path = proj_dirs.config_dir().join("config.toml");
    if config_path.is_file() {
        info!("Loading user configuration from: {}", config_path.display());
        load_config_from_path(&config_path).map(Some)
    } else {
        debug!("User configuration file not found at {}", config_path.display());
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    for dir in start.ancestors() {
        let candidate = dir.join(PROJECT_CONFIG_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").is_dir() {
            debug!("Found .git at {}, stopping project config search.", dir.display());
            return None;
        }
    }
    None
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = read_file_to_string(path)?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win wherever they differ from the defaults.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let Some(project) = project else {
        return user;
    };
    let defaults = Config::default();

    let pick = |project_value: bool, user_value: bool, default_value: bool| {
        if project_value != default_value {
            project_value
        } else {
            user_value
        }
    };

    Config {
        pager: PagerConfig {
            command: project.pager.command.or(user.pager.command),
            enabled: pick(
                project.pager.enabled,
                user.pager.enabled,
                defaults.pager.enabled,
            ),
        },
        menu: MenuConfig {
            prompt: if project.menu.prompt != defaults.menu.prompt {
                project.menu.prompt
            } else {
                user.menu.prompt
            },
            max_length: if project.menu.max_length != defaults.menu.max_length {
                project.menu.max_length
            } else {
                user.menu.max_length
            },
            hide_directories: pick(
                project.menu.hide_directories,
                user.menu.hide_directories,
                defaults.menu.hide_directories,
            ),
        },
    }
}

fn expand_config_paths(config: &mut Config) {
    if let Some(command) = config.pager.command.as_mut() {
        *command = shellexpand::tilde(command.as_str()).into_owned();
        debug!("Expanded pager command: {}", command);
    }
}

fn validate_config(config: &Config) -> Result<()> {
    if config.menu.max_length == 0 {
        return Err(anyhow!(ZscopeError::Config(
            "menu.max_length must be greater than zero.".to_string()
        )));
    }
    if let Some(command) = &config.pager.command {
        if command.trim().is_empty() {
            return Err(anyhow!(ZscopeError::Config(
                "pager.command cannot be empty; remove it to use $PAGER or less.".to_string()
            )));
        }
    }
    Ok(())
}
