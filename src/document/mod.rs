// Copyright (c) 2025 Mathdown Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Mathdown contributors

pub mod wordml;

use serde::Serialize;

pub const LIST_BULLET: &str = "List Bullet";
pub const LIST_NUMBER: &str = "List Number";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
}

impl Alignment {
    pub fn strify(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
        }
    }
}

/// Handle to a paragraph previously returned by [`DocumentSink::add_paragraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParagraphId(pub usize);

/// Receives document content in reading order.
pub trait DocumentSink {
    fn add_heading(&mut self, text: &str, level: u8);

    /// Start a paragraph. A non-empty `text` becomes its first, unstyled run.
    fn add_paragraph(&mut self, text: &str, alignment: Alignment, style: Option<&str>)
        -> ParagraphId;

    fn append_run(
        &mut self,
        paragraph: ParagraphId,
        text: &str,
        font: Option<&str>,
        size: Option<f32>,
    );
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Run {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f32>,
}

impl Run {
    pub fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            font: None,
            size: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DocBlock {
    Heading {
        level: u8,
        text: String,
    },
    Paragraph {
        alignment: Alignment,
        #[serde(skip_serializing_if = "Option::is_none")]
        style: Option<String>,
        runs: Vec<Run>,
    },
}

impl DocBlock {
    /// Concatenated text of the block.
    pub fn text(&self) -> String {
        match self {
            DocBlock::Heading { text, .. } => text.clone(),
            DocBlock::Paragraph { runs, .. } => runs.iter().map(|r| r.text.as_str()).collect(),
        }
    }
}

/// In-memory document built by the assembler.
#[derive(Debug, Default, Serialize)]
pub struct Document {
    pub blocks: Vec<DocBlock>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentSink for Document {
    fn add_heading(&mut self, text: &str, level: u8) {
        self.blocks.push(DocBlock::Heading {
            level: level.clamp(1, 6),
            text: text.to_string(),
        });
    }

    fn add_paragraph(
        &mut self,
        text: &str,
        alignment: Alignment,
        style: Option<&str>,
    ) -> ParagraphId {
        let runs = match text.is_empty() {
            true => vec![],
            false => vec![Run::plain(text)],
        };
        self.blocks.push(DocBlock::Paragraph {
            alignment,
            style: style.map(str::to_string),
            runs,
        });
        ParagraphId(self.blocks.len() - 1)
    }

    fn append_run(
        &mut self,
        paragraph: ParagraphId,
        text: &str,
        font: Option<&str>,
        size: Option<f32>,
    ) {
        if let Some(DocBlock::Paragraph { runs, .. }) = self.blocks.get_mut(paragraph.0) {
            runs.push(Run {
                text: text.to_string(),
                font: font.map(str::to_string),
                size,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_go_to_their_paragraph() {
        let mut doc = Document::new();
        let first = doc.add_paragraph("", Alignment::Left, None);
        doc.add_heading("Title", 1);
        doc.append_run(first, "a", Some("Cambria Math"), Some(12.0));
        doc.append_run(first, "b", None, None);

        assert_eq!(doc.blocks.len(), 2);
        assert_eq!(doc.blocks[0].text(), "ab");
        assert_eq!(doc.blocks[1].text(), "Title");
    }

    #[test]
    fn test_json_shape() {
        let mut doc = Document::new();
        doc.add_heading("H", 9);
        let p = doc.add_paragraph("x", Alignment::Center, Some("List Bullet"));
        doc.append_run(p, "y", Some("Cambria Math"), Some(16.0));

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["blocks"][0]["type"], "heading");
        assert_eq!(json["blocks"][0]["level"], 6);
        assert_eq!(json["blocks"][1]["alignment"], "center");
        assert_eq!(json["blocks"][1]["style"], "List Bullet");
        assert_eq!(json["blocks"][1]["runs"][0]["text"], "x");
        assert!(json["blocks"][1]["runs"][0].get("font").is_none());
        assert_eq!(json["blocks"][1]["runs"][1]["font"], "Cambria Math");
    }
}
