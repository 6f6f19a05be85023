// Copyright (c) 2025 Mathdown Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Mathdown contributors

use crate::math;

#[derive(clap::Args)]
pub struct RenderCommand {
    /// LaTeX expression, without the surrounding `$`.
    #[arg(required = true)]
    pub expr: String,
}

/// Print the Unicode rendering of an expression, one line per `\\` row.
pub fn render(command: &RenderCommand) -> eyre::Result<()> {
    for row in math::render_rows(&command.expr) {
        println!("{}", row);
    }
    Ok(())
}
