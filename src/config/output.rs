// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Kokic (@kokic)

use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Output {
    pub format: OutputFormat,
    pub dir: String,
}

impl Default for Output {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            dir: "./output".to_string(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, clap::ValueEnum, Default, Deserialize, Serialize)]
pub enum OutputFormat {
    /// Word 2003 XML, opened directly by Word.
    #[default]
    #[serde(rename = "xml")]
    Xml,

    #[serde(rename = "json")]
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Xml => "xml",
            OutputFormat::Json => "json",
        }
    }
}

#[derive(Debug)]
pub struct ParseOutputFormatError;

impl FromStr for OutputFormat {
    type Err = ParseOutputFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xml" => Ok(OutputFormat::Xml),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ParseOutputFormatError),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}
