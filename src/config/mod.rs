// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Kokic (@kokic), Spore (@s-cerevisiae)

pub mod document;
pub mod equation;
pub mod output;

use camino::{Utf8Path, Utf8PathBuf};
use document::DocumentStyle;
use equation::EquationStyle;
use eyre::{eyre, WrapErr};
use output::Output;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "./Mathdown.toml";

#[derive(Deserialize, Debug, Default, Serialize)]
pub struct Config {
    #[serde(default)]
    pub document: DocumentStyle,

    #[serde(default)]
    pub equation: EquationStyle,

    #[serde(default)]
    pub output: Output,
}

/// Try to find toml file at the given path or in the parent directory.
pub fn find_config(toml_file: &Utf8Path) -> Option<Utf8PathBuf> {
    if toml_file.exists() {
        return Some(toml_file.to_owned());
    }
    let parent = toml_file.parent()?.canonicalize_utf8().ok()?;
    let fallback = parent.parent()?.join(DEFAULT_CONFIG_PATH);
    fallback.exists().then_some(fallback)
}

pub fn parse_config(config: &str) -> eyre::Result<Config> {
    let config: Config =
        toml::from_str(config).map_err(|e| eyre!("failed to parse config file: {}", e))?;
    Ok(config)
}

/// Load the configuration, falling back to defaults when no file exists.
pub fn load_config(toml_file: &Utf8Path) -> eyre::Result<Config> {
    match find_config(toml_file) {
        Some(path) => {
            let toml = std::fs::read_to_string(&path)
                .wrap_err_with(|| eyre!("failed to read config file `{}`", path))?;
            parse_config(&toml).wrap_err_with(|| eyre!("invalid config file `{}`", path))
        }
        None => Ok(Config::default()),
    }
}
