// Copyright (c) 2025 Mathdown Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Mathdown contributors

//! Emit document content for the blocks of a tokenized markdown source,
//! replacing each placeholder token with its rendered formula.

use regex_lite::Regex;

use crate::{
    config::equation::EquationStyle,
    document::{Alignment, DocumentSink, ParagraphId, LIST_BULLET, LIST_NUMBER},
    formula::{Extraction, Formula, FormulaKind, FormulaTable},
    math,
};

use super::blocks::Block;

#[derive(Debug, Clone, Copy)]
enum Piece<'t, 'a> {
    Text(&'t str),
    Formula(&'a Formula),
}

#[derive(Debug, Default)]
pub struct Assembly {
    /// Tokens found in the text without a formula record, rendered literally.
    pub missing: Vec<String>,
}

pub struct Assembler<'a, S> {
    formulas: &'a FormulaTable,
    pattern: Regex,
    style: &'a EquationStyle,
    sink: &'a mut S,
    missing: Vec<String>,
}

impl<'a, S: DocumentSink> Assembler<'a, S> {
    pub fn new(extraction: &'a Extraction, style: &'a EquationStyle, sink: &'a mut S) -> Self {
        Self {
            formulas: &extraction.formulas,
            pattern: extraction.token_pattern(),
            style,
            sink,
            missing: vec![],
        }
    }

    pub fn run(mut self, blocks: &[Block]) -> Assembly {
        for block in blocks {
            match block {
                Block::Heading { level, text } => self.heading(text, *level),
                Block::Paragraph { text } => self.paragraph(text),
                Block::ListItem { text, ordered } => self.list_item(text, *ordered),
                Block::Other => (),
            }
        }
        Assembly {
            missing: self.missing,
        }
    }

    fn split<'t>(&mut self, text: &'t str) -> Vec<Piece<'t, 'a>> {
        let formulas: &'a FormulaTable = self.formulas;
        let mut pieces = vec![];
        let mut last = 0;
        for m in self.pattern.find_iter(text) {
            if m.start() > last {
                pieces.push(Piece::Text(&text[last..m.start()]));
            }
            match formulas.get(m.as_str()) {
                Some(formula) => pieces.push(Piece::Formula(formula)),
                None => {
                    self.missing.push(m.as_str().to_string());
                    pieces.push(Piece::Text(m.as_str()));
                }
            }
            last = m.end();
        }
        if last < text.len() {
            pieces.push(Piece::Text(&text[last..]));
        }
        pieces
    }

    /// Headings only take flattened text.
    fn heading(&mut self, text: &str, level: u8) {
        let text: String = self
            .split(text)
            .into_iter()
            .map(|piece| match piece {
                Piece::Text(s) => s.to_string(),
                Piece::Formula(formula) => math::render(&formula.content),
            })
            .collect();
        self.sink.add_heading(&text, level);
    }

    fn paragraph(&mut self, text: &str) {
        let pieces = self.split(text);
        if !pieces.iter().any(|p| matches!(p, Piece::Formula(_))) {
            if !text.trim().is_empty() {
                self.sink.add_paragraph(text, Alignment::Left, None);
            }
            return;
        }

        let mut current: Option<ParagraphId> = None;
        for (i, piece) in pieces.iter().enumerate() {
            match piece {
                Piece::Formula(formula) if formula.kind == FormulaKind::Block => {
                    current = None;
                    self.equation(&formula.content);
                }
                Piece::Formula(formula) => {
                    let paragraph = self.current_paragraph(&mut current);
                    self.inline_formula(paragraph, &formula.content);
                }
                Piece::Text(s) if s.trim().is_empty() => (),
                Piece::Text(s) => {
                    let mut s = *s;
                    if current.is_none() {
                        s = s.trim_start();
                    }
                    let closes = match pieces.get(i + 1) {
                        None => true,
                        Some(Piece::Formula(next)) => next.kind == FormulaKind::Block,
                        Some(Piece::Text(_)) => false,
                    };
                    if closes {
                        s = s.trim_end();
                    }
                    let paragraph = self.current_paragraph(&mut current);
                    self.sink.append_run(paragraph, s, None, None);
                }
            }
        }
    }

    /// Block formulas are not separated out of list items and are dropped.
    fn list_item(&mut self, text: &str, ordered: bool) {
        let style = if ordered { LIST_NUMBER } else { LIST_BULLET };
        let pieces = self.split(text);
        let paragraph = self.sink.add_paragraph("", Alignment::Left, Some(style));
        for piece in pieces {
            match piece {
                Piece::Formula(formula) if formula.kind == FormulaKind::Inline => {
                    self.inline_formula(paragraph, &formula.content);
                }
                Piece::Formula(_) => (),
                Piece::Text(s) if s.trim().is_empty() => (),
                Piece::Text(s) => self.sink.append_run(paragraph, s, None, None),
            }
        }
    }

    fn current_paragraph(&mut self, current: &mut Option<ParagraphId>) -> ParagraphId {
        *current.get_or_insert_with(|| self.sink.add_paragraph("", Alignment::Left, None))
    }

    fn inline_formula(&mut self, paragraph: ParagraphId, content: &str) {
        let rendered = math::render(content);
        self.sink.append_run(
            paragraph,
            &rendered,
            Some(self.style.font.as_str()),
            Some(self.style.inline_size),
        );
    }

    /// A centred paragraph of its own; rows separated by `\\` are spaced apart.
    fn equation(&mut self, content: &str) {
        let paragraph = self.sink.add_paragraph("", Alignment::Center, None);
        for (i, row) in math::render_rows(content).iter().enumerate() {
            if i > 0 {
                self.sink
                    .append_run(paragraph, &self.style.row_spacer, None, None);
            }
            self.sink.append_run(
                paragraph,
                row,
                Some(self.style.font.as_str()),
                Some(self.style.block_size),
            );
        }
    }
}

pub fn assemble<S: DocumentSink>(
    blocks: &[Block],
    extraction: &Extraction,
    style: &EquationStyle,
    sink: &mut S,
) -> Assembly {
    Assembler::new(extraction, style, sink).run(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        document::{DocBlock, Document, Run},
        formula::extract,
        process::blocks::read_blocks,
    };

    fn convert(markdown: &str) -> (Document, Assembly) {
        let extraction = extract(markdown);
        let blocks = read_blocks(&extraction.text);
        let mut doc = Document::new();
        let assembly = assemble(&blocks, &extraction, &EquationStyle::default(), &mut doc);
        (doc, assembly)
    }

    fn runs(block: &DocBlock) -> &[Run] {
        match block {
            DocBlock::Paragraph { runs, .. } => runs,
            DocBlock::Heading { .. } => panic!("expected a paragraph, got {:?}", block),
        }
    }

    fn alignment(block: &DocBlock) -> Alignment {
        match block {
            DocBlock::Paragraph { alignment, .. } => *alignment,
            DocBlock::Heading { .. } => panic!("expected a paragraph, got {:?}", block),
        }
    }

    #[test]
    fn test_block_formula_splits_paragraph() {
        let (doc, _) = convert("see $$x^2$$ end");
        assert_eq!(doc.blocks.len(), 3);
        assert_eq!(doc.blocks[0].text(), "see");
        assert_eq!(alignment(&doc.blocks[0]), Alignment::Left);
        assert_eq!(alignment(&doc.blocks[1]), Alignment::Center);
        assert_eq!(doc.blocks[1].text(), "x²");
        assert_eq!(runs(&doc.blocks[1])[0].size, Some(16.0));
        assert_eq!(runs(&doc.blocks[1])[0].font.as_deref(), Some("Cambria Math"));
        assert_eq!(doc.blocks[2].text(), "end");
    }

    #[test]
    fn test_inline_formula_joins_prose() {
        let (doc, _) = convert("Euler: $e^{i\\pi}+1=0$ holds.");
        assert_eq!(doc.blocks.len(), 1);
        let runs = runs(&doc.blocks[0]);
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[0].text, "Euler: ");
        assert!(runs[1].text.contains('π'));
        assert!(runs[1].text.contains("=0"));
        assert_eq!(runs[1].size, Some(12.0));
        assert_eq!(runs[2].text, " holds.");
        assert_eq!(runs[2].font, None);
    }

    #[test]
    fn test_standalone_sum() {
        let (doc, _) = convert("$$\\sum_{i=1}^{n} i$$");
        assert_eq!(doc.blocks.len(), 1);
        assert_eq!(alignment(&doc.blocks[0]), Alignment::Center);
        let text = doc.blocks[0].text();
        assert!(text.contains('Σ'));
        assert!(text.contains("ᵢ₌₁"));
        assert!(text.contains('ⁿ'));
    }

    #[test]
    fn test_heading_is_flattened() {
        let (doc, _) = convert("## Area $\\pi r^2$\n");
        assert_eq!(
            doc.blocks,
            vec![DocBlock::Heading {
                level: 2,
                text: "Area π r²".into()
            }]
        );
    }

    #[test]
    fn test_plain_and_blank_paragraphs() {
        let (doc, _) = convert("just text\n\n```\ncode\n```\n");
        assert_eq!(doc.blocks.len(), 1);
        assert_eq!(runs(&doc.blocks[0]), &[Run::plain("just text")]);
    }

    #[test]
    fn test_list_items() {
        let (doc, _) = convert("- has $x_1$ inline\n- drops $$y$$ block\n\n1. counted");
        assert_eq!(doc.blocks.len(), 3);
        match &doc.blocks[0] {
            DocBlock::Paragraph { style, runs, .. } => {
                assert_eq!(style.as_deref(), Some(LIST_BULLET));
                assert_eq!(runs[1].text, "x₁");
            }
            other => panic!("unexpected block {:?}", other),
        }
        assert!(!doc.blocks[1].text().contains('y'));
        match &doc.blocks[2] {
            DocBlock::Paragraph { style, .. } => assert_eq!(style.as_deref(), Some(LIST_NUMBER)),
            other => panic!("unexpected block {:?}", other),
        }
    }

    #[test]
    fn test_multi_row_equation() {
        let (doc, _) = convert("$$a = 1 \\\\ b = 2$$");
        let runs = runs(&doc.blocks[0]);
        let texts: Vec<_> = runs.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["a = 1", "     ", "b = 2"]);
        assert_eq!(runs[1].font, None);
    }

    #[test]
    fn test_missing_token_rendered_literally() {
        let extraction = extract("$x$");
        let orphan = format!("{} and MATHTOKENINLINE7END", extraction.text);
        let blocks = vec![Block::Paragraph { text: orphan }];
        let mut doc = Document::new();
        let assembly = assemble(&blocks, &extraction, &EquationStyle::default(), &mut doc);

        assert_eq!(assembly.missing, vec!["MATHTOKENINLINE7END".to_string()]);
        assert_eq!(doc.blocks.len(), 1);
        assert!(doc.blocks[0].text().ends_with("and MATHTOKENINLINE7END"));
        assert!(doc.blocks[0].text().starts_with('x'));
    }
}
