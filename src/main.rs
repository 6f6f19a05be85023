// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Kokic (@kokic)

mod cli;
mod config;
mod document;
mod formula;
mod math;
mod path_utils;
mod process;

use clap::Parser;

use crate::cli::{convert::ConvertCommand, init::InitCommand, render::RenderCommand};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Convert markdown with LaTeX math to a Word document.
    #[command(visible_alias = "c")]
    Convert(ConvertCommand),

    /// Print the Unicode rendering of a LaTeX expression.
    #[command(visible_alias = "r")]
    Render(RenderCommand),

    /// Write the default configuration file.
    #[command(visible_alias = "i")]
    Init(InitCommand),
}

fn main() -> eyre::Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Command::Convert(command) => crate::cli::convert::convert(command)?,
        Command::Render(command) => crate::cli::render::render(command)?,
        Command::Init(command) => crate::cli::init::init(command)?,
    };
    Ok(())
}
