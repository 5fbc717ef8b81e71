/*
** This file is a part of HtmlGen (markup tree builder)
** Copyright (C) 2000-2025 Gurer Ozen
**
** HtmlGen is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

use super::Attribute;
use super::Content;
use super::Document;
use super::Element;
use super::NodeId;
use super::Tree;

// All iterators follow the links lazily, one step per call, so each
// new iterator sees the tree as it is at that moment.

fn tag_matches(tree: &Tree, id: NodeId, filter: Option<&str>) -> bool {
    match tree.tag(id) {
        None => false,
        Some(tag) => filter.is_none_or(|name| tag.name == name),
    }
}

/// Sibling elements, optionally only the ones with a given tag.
pub struct Elements<'a, 't> {
    doc: &'a Document,
    current: Option<NodeId>,
    forward: bool,
    tag: Option<&'t str>,
}

impl<'a, 't> Elements<'a, 't> {
    pub(super) fn new(
        doc: &'a Document,
        start: Option<NodeId>,
        forward: bool,
        tag: Option<&'t str>,
    ) -> Self {
        Elements {
            doc,
            current: start,
            forward,
            tag,
        }
    }
}

impl<'a> Iterator for Elements<'a, '_> {
    type Item = Element<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let doc = self.doc;
        let tree = doc.tree.borrow();
        while let Some(id) = self.current {
            self.current = if self.forward {
                tree[id].next
            } else {
                tree[id].previous
            };
            if tag_matches(&tree, id, self.tag) {
                return Some(Element::new(id, doc));
            }
        }
        None
    }
}

/// Content nodes of an element in order.
pub struct Nodes<'a> {
    doc: &'a Document,
    current: Option<NodeId>,
}

impl<'a> Nodes<'a> {
    pub(super) fn new(doc: &'a Document, start: Option<NodeId>) -> Self {
        Nodes {
            doc,
            current: start,
        }
    }
}

impl<'a> Iterator for Nodes<'a> {
    type Item = Content<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.doc.tree.borrow()[id].next;
        Some(Content::from_id(id, self.doc))
    }
}

pub struct Attributes<'a> {
    doc: &'a Document,
    current: Option<NodeId>,
}

impl<'a> Attributes<'a> {
    pub(super) fn new(doc: &'a Document, start: Option<NodeId>) -> Self {
        Attributes {
            doc,
            current: start,
        }
    }
}

impl<'a> Iterator for Attributes<'a> {
    type Item = Attribute<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.doc.tree.borrow()[id].next;
        Some(Attribute::new(id, self.doc))
    }
}

pub struct Ancestors<'a, 't> {
    doc: &'a Document,
    current: Option<NodeId>,
    tag: Option<&'t str>,
}

impl<'a, 't> Ancestors<'a, 't> {
    pub(super) fn new(doc: &'a Document, start: Option<NodeId>, tag: Option<&'t str>) -> Self {
        Ancestors {
            doc,
            current: start,
            tag,
        }
    }
}

impl<'a> Iterator for Ancestors<'a, '_> {
    type Item = Element<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let doc = self.doc;
        let tree = doc.tree.borrow();
        while let Some(id) = self.current {
            self.current = tree[id].parent;
            if tag_matches(&tree, id, self.tag) {
                return Some(Element::new(id, doc));
            }
        }
        None
    }
}

/// Depth first, pre-order walk of the elements under a node.
pub struct Descendants<'a, 't> {
    doc: &'a Document,
    current: Option<NodeId>,
    level: usize,
    going_down: bool,
    skip_start: bool,
    tag: Option<&'t str>,
}

impl<'a, 't> Descendants<'a, 't> {
    pub(super) fn new(
        doc: &'a Document,
        start: NodeId,
        include_start: bool,
        tag: Option<&'t str>,
    ) -> Self {
        Descendants {
            doc,
            current: Some(start),
            level: 0,
            going_down: true,
            skip_start: !include_start,
            tag,
        }
    }

    fn step(&mut self, tree: &Tree) {
        let Some(mut current) = self.current else {
            return;
        };
        loop {
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
                    return;
                }
                None => {
                    self.level -= 1;
                    match tree[current].parent {
                        Some(parent) => current = parent,
                        None => {
                            self.current = None;
                            return;
                        }
                    }
                    self.going_down = false;
                }
            }
        }
    }
}

impl<'a> Iterator for Descendants<'a, '_> {
    type Item = Element<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let doc = self.doc;
        let tree = doc.tree.borrow();
        while let Some(id) = self.current {
            self.step(&tree);
            if self.skip_start {
                self.skip_start = false;
                continue;
            }
            if tag_matches(&tree, id, self.tag) {
                return Some(Element::new(id, doc));
            }
        }
        None
    }
}
