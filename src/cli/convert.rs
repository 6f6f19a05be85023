// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Kokic (@kokic), Spore (@s-cerevisiae)

use camino::{Utf8Path, Utf8PathBuf};
use eyre::{eyre, WrapErr};
use walkdir::WalkDir;

use crate::{
    config::{self, output::OutputFormat, Config},
    document::{wordml, Document},
    path_utils::{output_path, pretty_path},
    process,
};

#[derive(clap::Args)]
pub struct ConvertCommand {
    /// Markdown file, or a directory searched for `.md` files.
    #[arg(required = true)]
    pub input: Utf8PathBuf,

    /// Output file for a single input, or output directory for a directory.
    #[arg(short, long)]
    pub output: Option<Utf8PathBuf>,

    /// Path to the configuration file (e.g., "Mathdown.toml").
    #[arg(short, long, default_value_t = config::DEFAULT_CONFIG_PATH.into())]
    pub config: String,

    /// Output format, overriding the config and the output file extension.
    #[arg(short, long)]
    pub format: Option<OutputFormat>,
}

pub fn convert(command: &ConvertCommand) -> eyre::Result<()> {
    let config = config::load_config(Utf8Path::new(&command.config))?;
    let input = &command.input;
    if !input.exists() {
        return Err(eyre!("Does not exist: {}", input));
    }

    if input.is_dir() {
        let format = command.format.unwrap_or(config.output.format);
        let output = match &command.output {
            Some(output) => output.clone(),
            None => Utf8PathBuf::from(&config.output.dir),
        };
        let sources = markdown_sources(input)?;
        if sources.is_empty() {
            color_print::ceprintln!("<y>Warning: no markdown files under `{}`</>", input);
        }
        for source in sources {
            let target = output_path(input, &source, &output, format.extension());
            convert_file(&source, &target, format, &config)?;
        }
    } else {
        let (target, format) = match &command.output {
            Some(output) => {
                let inferred = output.extension().and_then(|ext| ext.parse().ok());
                let format = command.format.or(inferred).unwrap_or(config.output.format);
                (output.clone(), format)
            }
            None => {
                let format = command.format.unwrap_or(config.output.format);
                let dir = Utf8Path::new(&config.output.dir);
                (output_path(input, input, dir, format.extension()), format)
            }
        };
        convert_file(input, &target, format, &config)?;
    }
    Ok(())
}

fn is_markdown(path: &Utf8Path) -> bool {
    matches!(path.extension(), Some("md" | "markdown"))
}

/// All markdown files under `root`, in a stable order.
fn markdown_sources(root: &Utf8Path) -> eyre::Result<Vec<Utf8PathBuf>> {
    let mut sources = vec![];
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.wrap_err_with(|| eyre!("failed to read directory `{}`", root))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = Utf8PathBuf::from_path_buf(entry.into_path())
            .map_err(|p| eyre!("non UTF-8 path `{}`", p.display()))?;
        if is_markdown(&path) {
            sources.push(path);
        }
    }
    Ok(sources)
}

fn convert_file(
    source: &Utf8Path,
    target: &Utf8Path,
    format: OutputFormat,
    config: &Config,
) -> eyre::Result<()> {
    let markdown = std::fs::read_to_string(source)
        .wrap_err_with(|| eyre!("failed to read markdown file `{}`", source))?;

    let mut document = Document::new();
    let assembly = process::convert_markdown(&markdown, &config.equation, &mut document);
    for token in &assembly.missing {
        color_print::ceprintln!(
            "<y>Warning: no formula recorded for `{}` in `{}`</>",
            token,
            pretty_path(source)
        );
    }

    let content = serialize(&document, format, config)
        .wrap_err_with(|| eyre!("failed to serialize `{}`", source))?;
    if let Some(parent) = target.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| eyre!("failed to create output directory `{}`", parent))?;
    }
    std::fs::write(target, content)
        .wrap_err_with(|| eyre!("failed to write output file `{}`", target))?;

    println!("Converted: {} -> {}", pretty_path(source), pretty_path(target));
    Ok(())
}

fn serialize(document: &Document, format: OutputFormat, config: &Config) -> eyre::Result<String> {
    match format {
        OutputFormat::Xml => wordml::to_wordml(document, &config.document),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(document)?),
    }
}
