// Copyright (c) 2025 Mathdown Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Mathdown contributors

//! Single-file WordprocessingML (Word 2003 XML) output.
//!
//! Word opens these `.xml` files directly, which avoids packaging a zipped
//! `.docx` container.

use std::fmt::Write;

use eyre::eyre;
use pulldown_cmark_escape::escape_html;

use crate::config::document::DocumentStyle;

use super::{Alignment, DocBlock, Document, Run, LIST_BULLET, LIST_NUMBER};

const HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<?mso-application progid="Word.Document"?>
<w:wordDocument xmlns:w="http://schemas.microsoft.com/office/word/2003/wordml">
"#;

const HEADING_SIZES: [f32; 6] = [20.0, 16.0, 14.0, 13.0, 12.0, 12.0];

fn escape(out: &mut String, s: &str) -> eyre::Result<()> {
    escape_html(&mut *out, s).map_err(|_| eyre!("failed to escape `{}`", s))
}

fn style_id(name: &str) -> String {
    name.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Font size in half-points, as WordprocessingML expects.
fn half_points(size: f32) -> u32 {
    (size * 2.0).round() as u32
}

fn write_fonts(out: &mut String, font: &str) -> eyre::Result<()> {
    out.push_str("<w:rFonts w:ascii=\"");
    escape(out, font)?;
    out.push_str("\" w:h-ansi=\"");
    escape(out, font)?;
    out.push_str("\" w:fareast=\"");
    escape(out, font)?;
    out.push_str("\"/>");
    Ok(())
}

fn write_styles(out: &mut String, style: &DocumentStyle) -> eyre::Result<()> {
    out.push_str("<w:styles>\n");
    out.push_str(
        r#"<w:style w:type="paragraph" w:default="on" w:styleId="Normal"><w:name w:val="Normal"/><w:rPr>"#,
    );
    write_fonts(out, &style.font)?;
    write!(out, r#"<w:sz w:val="{}"/></w:rPr></w:style>"#, half_points(style.font_size))?;
    out.push('\n');

    for (i, size) in HEADING_SIZES.iter().enumerate() {
        write!(
            out,
            r#"<w:style w:type="paragraph" w:styleId="Heading{level}"><w:name w:val="heading {level}"/><w:basedOn w:val="Normal"/><w:pPr><w:outlineLvl w:val="{i}"/></w:pPr><w:rPr><w:b/><w:sz w:val="{sz}"/></w:rPr></w:style>"#,
            level = i + 1,
            i = i,
            sz = half_points(*size),
        )?;
        out.push('\n');
    }

    for name in [LIST_BULLET, LIST_NUMBER] {
        write!(
            out,
            r#"<w:style w:type="paragraph" w:styleId="{id}"><w:name w:val="{name}"/><w:basedOn w:val="Normal"/><w:pPr><w:ind w:left="360" w:hanging="360"/></w:pPr></w:style>"#,
            id = style_id(name),
            name = name,
        )?;
        out.push('\n');
    }
    out.push_str("</w:styles>\n");
    Ok(())
}

fn write_run(out: &mut String, run: &Run) -> eyre::Result<()> {
    out.push_str("<w:r>");
    if run.font.is_some() || run.size.is_some() {
        out.push_str("<w:rPr>");
        if let Some(font) = &run.font {
            write_fonts(out, font)?;
        }
        if let Some(size) = run.size {
            write!(out, r#"<w:sz w:val="{}"/>"#, half_points(size))?;
        }
        out.push_str("</w:rPr>");
    }
    out.push_str(r#"<w:t xml:space="preserve">"#);
    for (i, line) in run.text.split('\n').enumerate() {
        if i > 0 {
            out.push_str(r#"</w:t><w:br/><w:t xml:space="preserve">"#);
        }
        escape(out, line)?;
    }
    out.push_str("</w:t></w:r>");
    Ok(())
}

fn write_paragraph(
    out: &mut String,
    style: Option<&str>,
    alignment: Alignment,
    runs: &[Run],
) -> eyre::Result<()> {
    out.push_str("<w:p>");
    if style.is_some() || alignment != Alignment::Left {
        out.push_str("<w:pPr>");
        if let Some(style) = style {
            out.push_str(r#"<w:pStyle w:val=""#);
            escape(out, &style_id(style))?;
            out.push_str(r#""/>"#);
        }
        if alignment != Alignment::Left {
            write!(out, r#"<w:jc w:val="{}"/>"#, alignment.strify())?;
        }
        out.push_str("</w:pPr>");
    }
    for run in runs {
        write_run(out, run)?;
    }
    out.push_str("</w:p>\n");
    Ok(())
}

/// Serialize `document` with the default text style from `style`.
pub fn to_wordml(document: &Document, style: &DocumentStyle) -> eyre::Result<String> {
    let mut out = String::from(HEADER);
    write_styles(&mut out, style)?;
    out.push_str("<w:body>\n");

    // numbering restarts whenever a run of numbered items is interrupted
    let mut number = 0;
    for block in &document.blocks {
        match block {
            DocBlock::Heading { level, text } => {
                number = 0;
                let style = format!("Heading{}", level);
                write_paragraph(&mut out, Some(&style), Alignment::Left, &[Run::plain(text)])?;
            }
            DocBlock::Paragraph {
                alignment,
                style,
                runs,
            } => {
                let marker = match style.as_deref() {
                    Some(LIST_BULLET) => Some("• ".to_string()),
                    Some(LIST_NUMBER) => {
                        number += 1;
                        Some(format!("{}. ", number))
                    }
                    _ => None,
                };
                if style.as_deref() != Some(LIST_NUMBER) {
                    number = 0;
                }
                let runs: Vec<Run> = marker
                    .map(|m| Run::plain(&m))
                    .into_iter()
                    .chain(runs.iter().cloned())
                    .collect();
                write_paragraph(&mut out, style.as_deref(), *alignment, &runs)?;
            }
        }
    }

    out.push_str("</w:body>\n</w:wordDocument>\n");
    Ok(out)
}
