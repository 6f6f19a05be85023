// Copyright (c) 2025 Mathdown Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Mathdown contributors

use std::{iter::Peekable, str::CharIndices};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'s> {
    /// A control word (`\alpha`) or control symbol (`\{`, `\,`), without the backslash.
    Command(&'s str),
    Char(char),
    Space,
    Open,
    Close,
    Sub,
    Sup,
}

pub struct Lexer<'s> {
    source: &'s str,
    chars: Peekable<CharIndices<'s>>,
}

impl<'s> Lexer<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
        }
    }

    /// Byte offset of the next unread character.
    pub fn position(&mut self) -> usize {
        self.chars.peek().map_or(self.source.len(), |&(i, _)| i)
    }

    pub fn source(&self) -> &'s str {
        self.source
    }

    /// Read a command name after the backslash.
    fn read_command(&mut self) -> &'s str {
        let start = self.position();
        while self
            .chars
            .next_if(|&(_, c)| c.is_ascii_alphabetic())
            .is_some()
        {}
        if self.position() == start {
            // a control symbol is always exactly one character
            self.chars.next();
        }
        let end = self.position();
        &self.source[start..end]
    }
}

impl<'s> Iterator for Lexer<'s> {
    type Item = Token<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        let (_, c) = self.chars.next()?;
        let token = match c {
            '\\' => Token::Command(self.read_command()),
            '{' => Token::Open,
            '}' => Token::Close,
            '_' => Token::Sub,
            '^' => Token::Sup,
            c if c.is_whitespace() => {
                while self.chars.next_if(|&(_, c)| c.is_whitespace()).is_some() {}
                Token::Space
            }
            c => Token::Char(c),
        };
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens() {
        let tokens: Vec<_> = Lexer::new(r"\frac{a}{b}  x_1\,\\").collect();
        assert_eq!(
            tokens,
            vec![
                Token::Command("frac"),
                Token::Open,
                Token::Char('a'),
                Token::Close,
                Token::Open,
                Token::Char('b'),
                Token::Close,
                Token::Space,
                Token::Char('x'),
                Token::Sub,
                Token::Char('1'),
                Token::Command(","),
                Token::Command("\\"),
            ]
        );
    }

    #[test]
    fn test_trailing_backslash() {
        let tokens: Vec<_> = Lexer::new("a\\").collect();
        assert_eq!(tokens, vec![Token::Char('a'), Token::Command("")]);
    }
}
