//! The `init` command: write a commented scenario-file template.

use crate::config::file::{CONFIG_FILE_NAME, DEFAULT_CONFIG_TEMPLATE};
use anyhow::Result;
use std::fs;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Scenario file already exists. Use --force to overwrite.");
    }

    fs::write(&config_path, DEFAULT_CONFIG_TEMPLATE)?;
    println!("Created {} scenario file", CONFIG_FILE_NAME);

    Ok(())
}
