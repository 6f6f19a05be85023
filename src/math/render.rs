// Copyright (c) 2025 Mathdown Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Mathdown contributors

use itertools::Itertools;

use super::{
    ast::Node,
    script::{to_subscript, to_superscript},
};

fn unit_fraction(num: char, den: char) -> Option<char> {
    let glyph = match (num, den) {
        ('1', '2') => '½',
        ('1', '3') => '⅓',
        ('2', '3') => '⅔',
        ('1', '4') => '¼',
        ('3', '4') => '¾',
        ('1', '5') => '⅕',
        ('2', '5') => '⅖',
        ('3', '5') => '⅗',
        ('4', '5') => '⅘',
        ('1', '6') => '⅙',
        ('5', '6') => '⅚',
        ('1', '8') => '⅛',
        ('3', '8') => '⅜',
        ('5', '8') => '⅝',
        ('7', '8') => '⅞',
        _ => return None,
    };
    Some(glyph)
}

pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().join(" ")
}

/// Render a row of nodes, collapsing whitespace and trimming the result.
pub fn render_nodes(nodes: &[Node<'_>]) -> String {
    let mut out = String::new();
    nodes.iter().for_each(|node| write_node(node, &mut out));
    collapse_whitespace(&out)
}

fn render_node(node: &Node<'_>) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    collapse_whitespace(&out)
}

fn write_node(node: &Node<'_>, out: &mut String) {
    match node {
        Node::Char(c) | Node::Symbol(c) => out.push(*c),
        Node::Space | Node::Break => out.push(' '),
        Node::Function(name) => out.push_str(name),
        Node::Unknown(_) => (),
        Node::Verbatim(s) => out.push_str(s),
        Node::Group(nodes) => nodes.iter().for_each(|node| write_node(node, out)),
        Node::Frac { num, den } => {
            let glyph = num
                .braced_digit()
                .zip(den.braced_digit())
                .and_then(|(n, d)| unit_fraction(n, d));
            match glyph {
                Some(glyph) => out.push(glyph),
                None => {
                    out.push('(');
                    out.push_str(&render_node(num));
                    out.push_str(")/(");
                    out.push_str(&render_node(den));
                    out.push(')');
                }
            }
        }
        Node::Scripts { base, sub, sup } => {
            write_node(base, out);
            if let Some(sub) = sub {
                out.push_str(&to_subscript(&render_node(sub)));
            }
            if let Some(sup) = sup {
                out.push_str(&to_superscript(&render_node(sup)));
            }
        }
    }
}

/// Split a row at its top-level `\\` separators.
pub fn split_rows<'a, 's>(nodes: &'a [Node<'s>]) -> impl Iterator<Item = &'a [Node<'s>]> {
    nodes.split(|node| *node == Node::Break)
}
