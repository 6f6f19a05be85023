// Copyright (c) 2025 Mathdown Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Mathdown contributors

pub mod assemble;
pub mod blocks;

use assemble::Assembly;

use crate::{config::equation::EquationStyle, document::DocumentSink, formula};

/// Convert one markdown source into `sink`.
///
/// Formulas are swapped for tokens first so the markdown parser never sees
/// `$`, `_` or `\` inside math; the assembler then puts the rendered
/// formulas back in place.
pub fn convert_markdown<S: DocumentSink>(
    markdown: &str,
    style: &EquationStyle,
    sink: &mut S,
) -> Assembly {
    let extraction = formula::extract(markdown);
    let blocks = blocks::read_blocks(&extraction.text);
    assemble::assemble(&blocks, &extraction, style, sink)
}
