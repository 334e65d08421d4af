//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod process;

use std::path::Path;

use casemine_core::MinerConfig;

/// Load the config file given on the command line, or fall back to the
/// default location, or to built-in defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<MinerConfig> {
    if let Some(path) = config_path {
        return Ok(MinerConfig::from_file(Path::new(path))?);
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        Ok(MinerConfig::from_file(&default_path)?)
    } else {
        Ok(MinerConfig::default())
    }
}
