//! Command handlers for the deporder CLI.

pub mod check;
pub mod describe;
pub mod init;
pub mod util;

use anyhow::Result;
use std::path::{Path, PathBuf};

use deporder::config::Config;
use deporder::paths::CONFIG_FILE;

/// Load the config named with `--config`, or the merged global and project
/// config when none was given.
pub fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => {
            if !Path::new(CONFIG_FILE).exists() {
                anyhow::bail!(
                    "No {} found in the current directory. Run 'deporder init' first.",
                    CONFIG_FILE
                );
            }
            Config::load()
        }
    }
}
