// Copyright (c) 2025 Mathdown Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Mathdown contributors

#[derive(Debug, Clone, PartialEq)]
pub enum Node<'s> {
    Char(char),
    Space,
    /// A glyph from the symbol table or an escaped character such as `\{`.
    Symbol(char),
    Function(&'static str),
    /// A command without a rendering, dropped from the output.
    Unknown(&'s str),
    /// The row separator `\\`.
    Break,
    /// A brace-delimited run.
    Group(Vec<Node<'s>>),
    Frac {
        num: Box<Node<'s>>,
        den: Box<Node<'s>>,
    },
    Scripts {
        base: Box<Node<'s>>,
        sub: Option<Box<Node<'s>>>,
        sup: Option<Box<Node<'s>>>,
    },
    /// Source text kept as-is once nesting exceeds [`super::MAX_NESTING`].
    Verbatim(&'s str),
}

impl<'s> Node<'s> {
    pub fn empty() -> Self {
        Node::Group(Vec::new())
    }

    /// The digit held by a braced single-digit argument such as `{3}`.
    pub fn braced_digit(&self) -> Option<char> {
        match self {
            Node::Group(nodes) => match nodes.as_slice() {
                [Node::Char(c)] if c.is_ascii_digit() => Some(*c),
                _ => None,
            },
            _ => None,
        }
    }
}
