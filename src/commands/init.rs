//! The `init` command: write a default `.savannah.toml`.

use crate::config::SavannahConfig;
use anyhow::{bail, Context};
use std::fs;
use std::path::Path;

pub fn init_config(force: bool) -> anyhow::Result<()> {
    init_config_at(Path::new(".savannah.toml"), force)
}

pub fn init_config_at(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists; use --force to overwrite",
            path.display()
        );
    }
    let contents = toml::to_string_pretty(&SavannahConfig::default())
        .context("serializing default config")?;
    fs::write(path, contents).with_context(|| format!("writing {}", path.display()))?;
    println!("Created {}", path.display());
    Ok(())
}
