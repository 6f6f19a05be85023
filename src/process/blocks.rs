// Copyright (c) 2025 Mathdown Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Mathdown contributors

use std::mem;

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Math is left disabled: formulas are already tokens by the time the
/// markdown is parsed, and smart punctuation would rewrite literal text.
pub const OPTIONS: Options = Options::ENABLE_TABLES
    .union(Options::ENABLE_FOOTNOTES)
    .union(Options::ENABLE_STRIKETHROUGH);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph { text: String },
    ListItem { text: String, ordered: bool },
    /// Tables, code blocks, quotes, rules and everything else.
    Other,
}

struct Item {
    text: String,
    ordered: bool,
    /// Set once the text before a nested list has been emitted.
    emitted: bool,
}

/// Flattens markdown events into top-level [`Block`]s with plain text.
pub struct Blocks<E> {
    events: E,
    /// Innermost list last; `true` for ordered lists.
    lists: Vec<bool>,
    items: Vec<Item>,
}

impl<E> Blocks<E> {
    pub fn new(events: E) -> Self {
        Self {
            events,
            lists: vec![],
            items: vec![],
        }
    }
}

fn is_inline(tag: &Tag<'_>) -> bool {
    matches!(
        tag,
        Tag::Emphasis | Tag::Strong | Tag::Strikethrough | Tag::Link { .. } | Tag::Image { .. }
    )
}

impl<'e, E: Iterator<Item = Event<'e>>> Blocks<E> {
    /// Text up to the end tag matching an already consumed start tag.
    fn raw_text(&mut self) -> String {
        let mut text = String::new();
        let mut nest = 0;
        for event in self.events.by_ref() {
            match event {
                Event::Start(_) => nest += 1,
                Event::End(_) => {
                    if nest == 0 {
                        break;
                    }
                    nest -= 1;
                }
                Event::Text(s) | Event::Code(s) => text.push_str(&s),
                Event::SoftBreak | Event::HardBreak => text.push('\n'),
                _ => (),
            }
        }
        text
    }

    fn skip(&mut self) {
        let mut nest = 0;
        for event in self.events.by_ref() {
            match event {
                Event::Start(_) => nest += 1,
                Event::End(_) if nest == 0 => break,
                Event::End(_) => nest -= 1,
                _ => (),
            }
        }
    }

    fn push_item_text(&mut self, s: &str) {
        if let Some(item) = self.items.last_mut() {
            item.text.push_str(s);
        }
    }
}

impl<'e, E: Iterator<Item = Event<'e>>> Iterator for Blocks<E> {
    type Item = Block;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(event) = self.events.next() {
            match event {
                Event::Start(Tag::Heading { level, .. }) if self.items.is_empty() => {
                    let text = self.raw_text();
                    return Some(Block::Heading {
                        level: level as u8,
                        text,
                    });
                }
                Event::Start(Tag::Paragraph) => {
                    let text = self.raw_text();
                    match self.items.last_mut() {
                        None => return Some(Block::Paragraph { text }),
                        Some(item) => {
                            if !item.text.is_empty() {
                                item.text.push('\n');
                            }
                            item.text.push_str(&text);
                        }
                    }
                }
                Event::Start(Tag::List(start)) => {
                    self.lists.push(start.is_some());
                    if let Some(item) = self.items.last_mut() {
                        if !item.emitted {
                            item.emitted = true;
                            return Some(Block::ListItem {
                                text: mem::take(&mut item.text),
                                ordered: item.ordered,
                            });
                        }
                    }
                }
                Event::End(TagEnd::List(_)) => {
                    self.lists.pop();
                }
                Event::Start(Tag::Item) => {
                    let ordered = self.lists.last().copied().unwrap_or(false);
                    self.items.push(Item {
                        text: String::new(),
                        ordered,
                        emitted: false,
                    });
                }
                Event::End(TagEnd::Item) => {
                    if let Some(item) = self.items.pop() {
                        if !item.emitted || !item.text.trim().is_empty() {
                            return Some(Block::ListItem {
                                text: item.text,
                                ordered: item.ordered,
                            });
                        }
                    }
                }
                Event::Start(tag) if !self.items.is_empty() && (is_inline(&tag) || matches!(tag, Tag::Heading { .. })) => {
                    let text = self.raw_text();
                    self.push_item_text(&text);
                }
                Event::Start(_) => {
                    self.skip();
                    if self.items.is_empty() {
                        return Some(Block::Other);
                    }
                }
                Event::Text(s) | Event::Code(s) => self.push_item_text(&s),
                Event::SoftBreak | Event::HardBreak => self.push_item_text("\n"),
                Event::Rule if self.items.is_empty() => return Some(Block::Other),
                _ => (),
            }
        }
        None
    }
}

pub fn read_blocks(markdown: &str) -> Vec<Block> {
    Blocks::new(Parser::new_ext(markdown, OPTIONS)).collect()
}
