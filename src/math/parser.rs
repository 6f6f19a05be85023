// Copyright (c) 2025 Mathdown Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Mathdown contributors

//! Recursive-descent parser for the LaTeX subset.
//!
//! ```text
//! row      := (atom scripts*)*
//! atom     := char | space | command | '{' row '}'
//! scripts  := ('_' | '^') argument
//! argument := char | command | '{' row '}'
//! command  := 'frac' argument argument | symbol | function | unknown
//! ```
//!
//! Parsing never fails: stray `}` is kept as a character, an unclosed `{`
//! closes at the end of input and a `^` or `_` without argument is literal.

use super::{
    ast::Node,
    lexer::{Lexer, Token},
    symbol::{self, Symbol},
    MAX_NESTING,
};

pub fn parse(source: &str) -> Vec<Node<'_>> {
    Parser::new(source).parse_row(0)
}

struct Parser<'s> {
    lexer: Lexer<'s>,
    peeked: Option<Token<'s>>,
}

impl<'s> Parser<'s> {
    fn new(source: &'s str) -> Self {
        Self {
            lexer: Lexer::new(source),
            peeked: None,
        }
    }

    fn peek(&mut self) -> Option<Token<'s>> {
        if self.peeked.is_none() {
            self.peeked = self.lexer.next();
        }
        self.peeked
    }

    fn next(&mut self) -> Option<Token<'s>> {
        self.peeked.take().or_else(|| self.lexer.next())
    }

    fn skip_spaces(&mut self) {
        while self.peek() == Some(Token::Space) {
            self.next();
        }
    }

    fn parse_row(&mut self, depth: usize) -> Vec<Node<'s>> {
        let mut row = Vec::new();
        while let Some(token) = self.peek() {
            match token {
                Token::Close if depth > 0 => break,
                Token::Close => {
                    self.next();
                    row.push(Node::Char('}'));
                }
                Token::Sub | Token::Sup => {
                    self.next();
                    self.attach_script(&mut row, token == Token::Sup, depth);
                }
                _ => {
                    let node = self.parse_atom(depth);
                    row.push(node);
                }
            }
        }
        row
    }

    fn parse_atom(&mut self, depth: usize) -> Node<'s> {
        match self.next() {
            Some(Token::Char(c)) => Node::Char(c),
            Some(Token::Space) => Node::Space,
            Some(Token::Open) => self.parse_group(depth + 1),
            Some(Token::Command(name)) => self.parse_command(name, depth + 1),
            Some(Token::Close) => Node::Char('}'),
            Some(Token::Sub) => Node::Char('_'),
            Some(Token::Sup) => Node::Char('^'),
            None => Node::empty(),
        }
    }

    /// Called right after the opening brace has been consumed.
    fn parse_group(&mut self, depth: usize) -> Node<'s> {
        if depth > MAX_NESTING {
            return self.skip_group();
        }
        let row = self.parse_row(depth);
        if self.peek() == Some(Token::Close) {
            self.next();
        }
        Node::Group(row)
    }

    /// Consume the rest of a group without parsing it.
    fn skip_group(&mut self) -> Node<'s> {
        debug_assert!(self.peeked.is_none());
        let source = self.lexer.source();
        let start = self.lexer.position();
        let mut level = 0usize;
        loop {
            let before = self.lexer.position();
            match self.lexer.next() {
                Some(Token::Open) => level += 1,
                Some(Token::Close) if level == 0 => return Node::Verbatim(&source[start..before]),
                Some(Token::Close) => level -= 1,
                Some(_) => (),
                None => return Node::Verbatim(&source[start..]),
            }
        }
    }

    fn parse_argument(&mut self, depth: usize) -> Option<Node<'s>> {
        self.skip_spaces();
        match self.peek()? {
            Token::Open => {
                self.next();
                Some(self.parse_group(depth + 1))
            }
            Token::Command(name) => {
                self.next();
                Some(self.parse_command(name, depth + 1))
            }
            Token::Char(c) => {
                self.next();
                Some(Node::Char(c))
            }
            Token::Close | Token::Sub | Token::Sup | Token::Space => None,
        }
    }

    fn attach_script(&mut self, row: &mut Vec<Node<'s>>, is_sup: bool, depth: usize) {
        let Some(script) = self.parse_argument(depth) else {
            row.push(Node::Char(if is_sup { '^' } else { '_' }));
            return;
        };
        while row.last() == Some(&Node::Space) {
            row.pop();
        }
        let script = Some(Box::new(script));
        let base = match row.pop() {
            Some(Node::Scripts { base, sub, sup: None }) if is_sup => {
                row.push(Node::Scripts {
                    base,
                    sub,
                    sup: script,
                });
                return;
            }
            Some(Node::Scripts { base, sub: None, sup }) if !is_sup => {
                row.push(Node::Scripts {
                    base,
                    sub: script,
                    sup,
                });
                return;
            }
            // the slot is taken: start over on an empty base next to it
            Some(full @ Node::Scripts { .. }) => {
                row.push(full);
                Node::empty()
            }
            Some(base) => base,
            None => Node::empty(),
        };
        let base = Box::new(base);
        row.push(match is_sup {
            true => Node::Scripts {
                base,
                sub: None,
                sup: script,
            },
            false => Node::Scripts {
                base,
                sub: script,
                sup: None,
            },
        });
    }

    fn parse_command(&mut self, name: &'s str, depth: usize) -> Node<'s> {
        match name {
            "frac" | "dfrac" | "tfrac" if depth <= MAX_NESTING => {
                let num = self.parse_argument(depth).unwrap_or_else(Node::empty);
                let den = self.parse_argument(depth).unwrap_or_else(Node::empty);
                Node::Frac {
                    num: Box::new(num),
                    den: Box::new(den),
                }
            }
            "\\" => Node::Break,
            "," | ";" | ":" | "!" | " " | "quad" | "qquad" => Node::Space,
            "{" | "}" | "%" | "$" | "&" | "#" | "_" | "|" => {
                Node::Symbol(name.chars().next().unwrap_or_default())
            }
            _ => match symbol::lookup(name) {
                Some(Symbol::Glyph(c)) => Node::Symbol(c),
                Some(Symbol::Function(f)) => Node::Function(f),
                None => Node::Unknown(name),
            },
        }
    }
}
