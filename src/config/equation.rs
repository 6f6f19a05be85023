// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Kokic (@kokic)

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Clone, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct EquationStyle {
    pub font: String,
    /// Type size of standalone `$$...$$` equations.
    pub block_size: f32,
    pub inline_size: f32,
    /// Inserted between the rows of a multi-row equation.
    pub row_spacer: String,
}

impl Default for EquationStyle {
    fn default() -> Self {
        Self {
            font: "Cambria Math".to_string(),
            block_size: 16.0,
            inline_size: 12.0,
            row_spacer: "     ".to_string(),
        }
    }
}
