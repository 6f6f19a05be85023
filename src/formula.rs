// Copyright (c) 2025 Mathdown Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Mathdown contributors

//! Replace `$$...$$` and `$...$` spans with placeholder tokens.
//!
//! Tokens are made of ASCII letters and digits only, so a Markdown parser
//! passes them through untouched and they can be matched again in the
//! extracted text.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex_lite::Regex;

/// Block spans may cross lines and are matched over the whole source first.
static BLOCK_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\$([^$]+?)\$\$").expect("valid regex"));

/// Inline spans never cross lines; matched over the block-rewritten text.
static INLINE_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$([^$\n]+?)\$").expect("valid regex"));

const MARKER: &str = "MATHTOKEN";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormulaKind {
    Block,
    Inline,
}

impl FormulaKind {
    fn strify(&self) -> &'static str {
        match self {
            FormulaKind::Block => "BLOCK",
            FormulaKind::Inline => "INLINE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formula {
    pub id: String,
    pub content: String,
    pub kind: FormulaKind,
    /// Byte offset of the opening delimiter in the original source.
    pub offset: usize,
}

pub type FormulaTable = IndexMap<String, Formula>;

#[derive(Debug)]
pub struct Extraction {
    /// Source with every formula span replaced by its token.
    pub text: String,
    /// Formulas in source order.
    pub formulas: FormulaTable,
    marker: String,
}

impl Extraction {
    /// Pattern matching every token this extraction could have produced.
    pub fn token_pattern(&self) -> Regex {
        token_pattern(&self.marker)
    }
}

pub fn token_pattern(marker: &str) -> Regex {
    let pattern = format!(r"{}(?:BLOCK|INLINE)[0-9]+END", regex_lite::escape(marker));
    Regex::new(&pattern).expect("marker is escaped")
}

/// Pick a marker that does not occur anywhere in `source`.
fn choose_marker(source: &str) -> String {
    let mut marker = MARKER.to_string();
    while source.contains(&marker) {
        marker.push('X');
    }
    marker
}

/// End of a replaced span, in the rewritten text and in the text it came from.
#[derive(Debug, Clone, Copy)]
struct Shift {
    rewritten: usize,
    original: usize,
}

/// Map a position of the rewritten text back to the text it came from.
fn original_offset(shifts: &[Shift], pos: usize) -> usize {
    match shifts.partition_point(|shift| shift.rewritten <= pos) {
        0 => pos,
        i => shifts[i - 1].original + (pos - shifts[i - 1].rewritten),
    }
}

struct Rewriter<'a> {
    marker: &'a str,
    formulas: FormulaTable,
}

impl Rewriter<'_> {
    /// Replace every `pattern` span of `text` with a token of `kind`.
    /// `offset` maps a position of `text` to the original source.
    fn rewrite(
        &mut self,
        text: &str,
        pattern: &Regex,
        kind: FormulaKind,
        offset: impl Fn(usize) -> usize,
    ) -> (String, Vec<Shift>) {
        let mut out = String::with_capacity(text.len());
        let mut shifts = vec![];
        let mut last = 0;
        for caps in pattern.captures_iter(text) {
            let (Some(span), Some(content)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            out.push_str(&text[last..span.start()]);
            let id = format!("{}{}{}END", self.marker, kind.strify(), self.formulas.len());
            match kind {
                FormulaKind::Block => {
                    out.push('\n');
                    out.push_str(&id);
                    out.push('\n');
                }
                FormulaKind::Inline => out.push_str(&id),
            }
            self.formulas.insert(
                id.clone(),
                Formula {
                    id,
                    content: content.as_str().to_string(),
                    kind,
                    offset: offset(span.start()),
                },
            );
            last = span.end();
            shifts.push(Shift {
                rewritten: out.len(),
                original: last,
            });
        }
        out.push_str(&text[last..]);
        (out, shifts)
    }
}

pub fn extract(source: &str) -> Extraction {
    let marker = choose_marker(source);
    let mut rewriter = Rewriter {
        marker: &marker,
        formulas: FormulaTable::new(),
    };

    let (text, shifts) = rewriter.rewrite(source, &BLOCK_SPAN, FormulaKind::Block, |pos| pos);
    let (text, _) = rewriter.rewrite(&text, &INLINE_SPAN, FormulaKind::Inline, |pos| {
        original_offset(&shifts, pos)
    });

    let mut formulas = rewriter.formulas;
    formulas.sort_by(|_, a, _, b| a.offset.cmp(&b.offset));
    Extraction {
        text,
        formulas,
        marker,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_and_block() {
        let extraction = extract("Area $\\pi r^2$ and\n$$\nE = mc^2\n$$\ndone");
        let formulas: Vec<_> = extraction.formulas.values().collect();
        assert_eq!(formulas.len(), 2);
        assert_eq!(formulas[0].kind, FormulaKind::Inline);
        assert_eq!(formulas[0].content, "\\pi r^2");
        assert_eq!(formulas[1].kind, FormulaKind::Block);
        assert_eq!(formulas[1].content, "\nE = mc^2\n");
        assert_eq!(
            extraction.text,
            format!("Area {} and\n\n{}\n\ndone", formulas[0].id, formulas[1].id)
        );
    }

    #[test]
    fn test_counts_and_tokens() {
        let source = "$a$ $$b$$ text $c$\n$$d\ne$$ $f$";
        let extraction = extract(source);
        assert_eq!(extraction.formulas.len(), 5);
        let blocks = extraction
            .formulas
            .values()
            .filter(|f| f.kind == FormulaKind::Block)
            .count();
        assert_eq!(blocks, 2);

        let pattern = extraction.token_pattern();
        let found: Vec<_> = pattern
            .find_iter(&extraction.text)
            .map(|m| m.as_str())
            .collect();
        assert_eq!(found.len(), 5);
        for token in found {
            assert!(extraction.formulas.contains_key(token));
        }
        let literal = pattern.replace_all(&extraction.text, "");
        assert!(!literal.contains(MARKER));
        assert!(!literal.contains('$'));
    }

    #[test]
    fn test_source_order() {
        let extraction = extract("$x$ then $$y$$");
        let contents: Vec<_> = extraction
            .formulas
            .values()
            .map(|f| (f.content.as_str(), f.offset))
            .collect();
        assert_eq!(contents, vec![("x", 0), ("y", 9)]);
    }

    #[test]
    fn test_stray_dollar_before_block() {
        let extraction = extract("costs $5 and $$x^2$$ here");
        let formulas: Vec<_> = extraction.formulas.values().collect();
        assert_eq!(formulas.len(), 1);
        assert_eq!(formulas[0].kind, FormulaKind::Block);
        assert_eq!(formulas[0].content, "x^2");
        assert_eq!(formulas[0].offset, 13);
        assert_eq!(
            extraction.text,
            format!("costs $5 and \n{}\n here", formulas[0].id)
        );
    }

    #[test]
    fn test_inline_offsets_after_blocks() {
        let source = "$a$ $$bb$$ $c$ $$d$$ $e$";
        let extraction = extract(source);
        let records: Vec<_> = extraction
            .formulas
            .values()
            .map(|f| (f.kind, f.content.as_str(), f.offset))
            .collect();
        assert_eq!(
            records,
            vec![
                (FormulaKind::Inline, "a", 0),
                (FormulaKind::Block, "bb", 4),
                (FormulaKind::Inline, "c", 11),
                (FormulaKind::Block, "d", 15),
                (FormulaKind::Inline, "e", 21),
            ]
        );
        for formula in extraction.formulas.values() {
            assert!(source[formula.offset..].starts_with('$'));
        }
    }

    #[test]
    fn test_unbalanced_stays_literal() {
        let source = "costs $5 today\n$$ never closed";
        let extraction = extract(source);
        assert!(extraction.formulas.is_empty());
        assert_eq!(extraction.text, source);

        let extraction = extract("no\n$newline$ $a\nb$");
        assert_eq!(extraction.formulas.len(), 1);
    }

    #[test]
    fn test_marker_avoids_collision() {
        let source = "literal MATHTOKENINLINE0END here $x$";
        let extraction = extract(source);
        let formula = extraction.formulas.values().next().unwrap();
        assert_eq!(formula.id, "MATHTOKENXINLINE0END");
        assert_eq!(
            extraction.text,
            "literal MATHTOKENINLINE0END here MATHTOKENXINLINE0END"
        );
        let found: Vec<_> = extraction
            .token_pattern()
            .find_iter(&extraction.text)
            .map(|m| m.as_str())
            .collect();
        assert_eq!(found, vec!["MATHTOKENXINLINE0END"]);
    }
}
