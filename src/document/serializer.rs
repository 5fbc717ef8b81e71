/*
** This file is a part of HtmlGen (markup tree builder)
** Copyright (C) 2000-2025 Gurer Ozen
**
** HtmlGen is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

use std::borrow::Cow;
use std::fmt::Write;

use tracing::debug;

use super::NodeId;
use super::NodePayload;
use super::Tag;
use super::Tree;
use crate::entities::escape_attribute;
use crate::entities::escape_comment;
use crate::entities::escape_text;
use crate::entities::escaped_size;

/// Controls the whitespace inserted between elements.
///
/// With formatting on, an element goes on its own line, indented by its
/// depth below the serialized node, when that depth is inside the
/// element's indent depth window. With formatting off nothing is
/// inserted at all.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SerializeOptions {
    pub formatting: bool,
    pub indent: Cow<'static, str>,
    pub newline: Cow<'static, str>,
}

impl SerializeOptions {
    /// Compact output, no line breaks or indentation.
    pub const NO_FORMATTING: SerializeOptions = SerializeOptions {
        formatting: false,
        indent: Cow::Borrowed(""),
        newline: Cow::Borrowed(""),
    };

    pub fn new() -> SerializeOptions {
        SerializeOptions::default()
    }

    pub fn with_formatting(mut self, formatting: bool) -> SerializeOptions {
        self.formatting = formatting;
        self
    }

    pub fn with_indent(mut self, indent: impl Into<Cow<'static, str>>) -> SerializeOptions {
        self.indent = indent.into();
        self
    }

    pub fn with_newline(mut self, newline: impl Into<Cow<'static, str>>) -> SerializeOptions {
        self.newline = newline.into();
        self
    }
}

impl Default for SerializeOptions {
    fn default() -> Self {
        SerializeOptions {
            formatting: true,
            indent: Cow::Borrowed("\t"),
            newline: Cow::Borrowed("\n"),
        }
    }
}

struct Visitor {
    going_down: bool,
    current: Option<NodeId>,
    level: usize,
}

enum VisitorStep<'t> {
    StartTag(&'t Tag),
    EndTag(&'t Tag),
    Text(&'t str),
    Comment(&'t str),
    Attribute(NodeId),
}

impl Visitor {
    fn new(start: NodeId) -> Visitor {
        Visitor {
            going_down: true,
            current: Some(start),
            level: 0,
        }
    }

    fn step(&mut self, tree: &Tree, current: NodeId) {
        if self.going_down
            && let Some(child) = tree.tag(current).and_then(|tag| tag.children.first)
        {
            self.current = Some(child);
            self.level += 1;
            return;
        }
        if self.level == 0 {
            self.current = None;
            return;
        }
        match tree[current].next {
            Some(next) => {
                self.current = Some(next);
                self.going_down = true;
            }
            None => {
                self.level -= 1;
                self.current = tree[current].parent;
                self.going_down = false;
            }
        }
    }

    /// Next step and the depth of its node below the start node.
    fn next<'t>(&mut self, tree: &'t Tree) -> Option<(usize, VisitorStep<'t>)> {
        let old = self.current?;
        let old_going_down = self.going_down;
        let depth = self.level;
        self.step(tree, old);
        let step = match &tree[old].payload {
            NodePayload::Tag(tag) => {
                if old_going_down {
                    VisitorStep::StartTag(tag)
                } else {
                    VisitorStep::EndTag(tag)
                }
            }
            NodePayload::Text(text) => VisitorStep::Text(text),
            NodePayload::Comment(comment) => VisitorStep::Comment(comment),
            NodePayload::Attribute(_) => VisitorStep::Attribute(old),
        };
        Some((depth, step))
    }
}

fn write_attribute<W: Write>(tree: &Tree, id: NodeId, w: &mut W) -> std::fmt::Result {
    if let NodePayload::Attribute(data) = &tree[id].payload {
        w.write_str(&data.name)?;
        if let Some(value) = &data.value {
            w.write_str("=\"")?;
            escape_attribute(value, w)?;
            w.write_char('"')?;
        }
    }
    Ok(())
}

fn write_line_start<W: Write>(
    options: &SerializeOptions,
    depth: usize,
    w: &mut W,
) -> std::fmt::Result {
    w.write_str(&options.newline)?;
    for _ in 0..depth {
        w.write_str(&options.indent)?;
    }
    Ok(())
}

fn write_start_tag<W: Write>(tree: &Tree, tag: &Tag, w: &mut W) -> std::fmt::Result {
    w.write_char('<')?;
    w.write_str(&tag.name)?;
    let mut attribute = tag.attributes.first;
    while let Some(id) = attribute {
        w.write_char(' ')?;
        write_attribute(tree, id, w)?;
        attribute = tree[id].next;
    }
    w.write_char('>')?;
    if let Some(text) = &tag.inner_text {
        escape_text(text, w)?;
    }
    Ok(())
}

fn write_end_tag<W: Write>(tag: &Tag, w: &mut W) -> std::fmt::Result {
    w.write_str("</")?;
    w.write_str(&tag.name)?;
    w.write_char('>')
}

/// Writes the node and everything under it.
pub(super) fn write_node<W: Write>(
    tree: &Tree,
    id: NodeId,
    options: &SerializeOptions,
    w: &mut W,
) -> std::fmt::Result {
    // One entry per open tag: did any of its children go on a new line
    let mut broken: Vec<bool> = Vec::new();
    let mut visitor = Visitor::new(id);
    while let Some((depth, step)) = visitor.next(tree) {
        match step {
            VisitorStep::StartTag(tag) => {
                if options.formatting && depth > 0 && tag.indents_at(depth) {
                    write_line_start(options, depth, w)?;
                    if let Some(parent) = broken.last_mut() {
                        *parent = true;
                    }
                }
                write_start_tag(tree, tag, w)?;
                if tag.children.first.is_some() {
                    broken.push(false);
                } else if !tag.is_void {
                    write_end_tag(tag, w)?;
                }
            }
            VisitorStep::EndTag(tag) => {
                if broken.pop().unwrap_or(false) && options.formatting {
                    write_line_start(options, depth, w)?;
                }
                write_end_tag(tag, w)?;
            }
            VisitorStep::Text(text) => escape_text(text, w)?,
            VisitorStep::Comment(comment) => {
                w.write_str("<!--")?;
                escape_comment(comment, w)?;
                w.write_str("-->")?;
            }
            VisitorStep::Attribute(id) => write_attribute(tree, id, w)?,
        }
    }
    Ok(())
}

fn attribute_size(tree: &Tree, id: NodeId) -> usize {
    match &tree[id].payload {
        NodePayload::Attribute(data) => {
            data.name.len() + data.value.as_ref().map_or(0, |value| value.len() + 3)
        }
        _ => 0,
    }
}

/// Rough output size without any inserted whitespace, for preallocation.
fn estimated_size(tree: &Tree, id: NodeId) -> usize {
    let mut size = 0;
    let mut visitor = Visitor::new(id);
    while let Some((_, step)) = visitor.next(tree) {
        size += match step {
            VisitorStep::StartTag(tag) => {
                let mut tag_size = tag.name.len() * 2 + 5;
                tag_size += tag.inner_text.as_deref().map_or(0, escaped_size);
                let mut attribute = tag.attributes.first;
                while let Some(child) = attribute {
                    tag_size += 1 + attribute_size(tree, child);
                    attribute = tree[child].next;
                }
                tag_size
            }
            VisitorStep::EndTag(_) => 0,
            VisitorStep::Text(text) => escaped_size(text),
            VisitorStep::Comment(comment) => comment.len() + 7,
            VisitorStep::Attribute(id) => attribute_size(tree, id),
        };
    }
    size
}

/// Serializes a node into a new string.
pub(super) fn render(tree: &Tree, id: NodeId, options: &SerializeOptions) -> String {
    let mut buf = String::with_capacity(estimated_size(tree, id));
    // Writing into a String cannot fail
    let _ = write_node(tree, id, options, &mut buf);
    debug!(node = id.0, size = buf.len(), "serialized node");
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let options = SerializeOptions::new();
        assert!(options.formatting);
        assert_eq!(options.indent, "\t");
        assert_eq!(options.newline, "\n");
        assert_eq!(options, SerializeOptions::default());
    }

    #[test]
    fn option_builders() {
        let options = SerializeOptions::new()
            .with_indent("  ")
            .with_newline(String::from("\r\n"))
            .with_formatting(false);
        assert!(!options.formatting);
        assert_eq!(options.indent, "  ");
        assert_eq!(options.newline, "\r\n");
        assert!(!SerializeOptions::NO_FORMATTING.formatting);
    }
}
