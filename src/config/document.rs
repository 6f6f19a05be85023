// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Kokic (@kokic)

use serde::{Deserialize, Serialize};

pub const DEFAULT_FONT: &str = "SimSun";
pub const DEFAULT_FONT_SIZE: f32 = 12.0;

/// Default text style of the generated document.
#[derive(Deserialize, Debug, Clone, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DocumentStyle {
    pub font: String,
    pub font_size: f32,
}

impl Default for DocumentStyle {
    fn default() -> Self {
        Self {
            font: DEFAULT_FONT.to_string(),
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}
