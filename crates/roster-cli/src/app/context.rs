//! Application context for the Roster CLI.
//!
//! Bundles CLI arguments with lazily-resolved configuration so handlers
//! do not each re-derive the roster path.

use std::path::PathBuf;

use log::debug;
use once_cell::unsync::OnceCell;

use roster_core::storage::CsvFile;
use roster_core::EmployeeStore;

use crate::cli::Cli;
use crate::config;
use crate::ui::UiContext;

pub struct AppContext<'a> {
    cli: &'a Cli,
    roster_path: OnceCell<PathBuf>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            roster_path: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Resolve the roster file path: flag/env, then config file, then the
    /// XDG data default.
    pub fn roster_path(&self) -> anyhow::Result<&PathBuf> {
        self.roster_path.get_or_try_init(|| {
            if let Some(ref file) = self.cli.file {
                return Ok(PathBuf::from(file));
            }
            let config_path = config::default_config_path()?;
            if config_path.exists() {
                let config = config::read_config(&config_path)?;
                return Ok(PathBuf::from(config.roster.path));
            }
            config::default_roster_path()
        })
    }

    /// Open the employee store over the resolved roster file.
    ///
    /// Creates the parent directory on first use so the default data path
    /// works out of the box.
    pub fn open_store(&self) -> anyhow::Result<EmployeeStore> {
        let path = self.roster_path()?;
        debug!("opening roster file {}", path.display());
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    anyhow::anyhow!("Failed to create {}: {}", parent.display(), e)
                })?;
            }
        }
        Ok(EmployeeStore::open(Box::new(CsvFile::new(path))))
    }

    /// Build a UI context from per-command output flags.
    pub fn ui_context(&self, json_flag: bool, format_flag: Option<&str>) -> UiContext {
        UiContext::from_env(json_flag, format_flag)
    }
}
