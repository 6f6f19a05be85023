// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Kokic (@kokic)

use camino::{Utf8Path, Utf8PathBuf};
use eyre::WrapErr;

use crate::config::{self, Config};

#[derive(clap::Args)]
pub struct InitCommand {
    /// Path to the new configuration file.
    #[arg(default_value_t = config::DEFAULT_CONFIG_PATH.into())]
    pub path: Utf8PathBuf,

    /// Overwrite an existing configuration file.
    #[arg(short, long, default_value_t = false)]
    pub force: bool,
}

pub fn init(command: &InitCommand) -> eyre::Result<()> {
    let path = &command.path;
    if path.exists() && !command.force {
        return Err(eyre::eyre!("Already exists: {}", path));
    }
    write_default_config(path)
}

fn write_default_config(path: &Utf8Path) -> eyre::Result<()> {
    let toml = default_config_toml()?;
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).wrap_err("failed to create config directory")?;
    }
    std::fs::write(path, toml).wrap_err("failed to create default config file")?;
    println!("Created new config at: {}", path);
    Ok(())
}

fn default_config_toml() -> eyre::Result<String> {
    toml::to_string(&Config::default()).wrap_err("failed to serialize default config")
}
