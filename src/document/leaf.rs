/*
** This file is a part of HtmlGen (markup tree builder)
** Copyright (C) 2000-2025 Gurer Ozen
**
** HtmlGen is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

use super::Content;
use super::Document;
use super::NodeId;
use super::NodePayload;
use super::content::node_handle;

/// Handle to a text node. The text is escaped when serialized.
#[derive(Clone, Copy)]
pub struct Text<'a> {
    pub(super) id: NodeId,
    pub(super) doc: &'a Document,
}

node_handle!(Text, Text);

/// Handle to a comment node. The text is written as is.
#[derive(Clone, Copy)]
pub struct Comment<'a> {
    pub(super) id: NodeId,
    pub(super) doc: &'a Document,
}

node_handle!(Comment, Comment);

macro_rules! leaf_methods {
    ($handle:ident, $payload:ident) => {
        impl<'a> $handle<'a> {
            pub fn value(&self) -> String {
                let tree = self.doc.tree.borrow();
                match &tree[self.id].payload {
                    NodePayload::$payload(value) => value.clone(),
                    _ => unreachable!(),
                }
            }

            pub fn set_value(&self, value: &str) {
                let mut tree = self.doc.tree.borrow_mut();
                if let NodePayload::$payload(old) = &mut tree[self.id].payload {
                    *old = value.to_string();
                }
            }

            pub fn next_node(&self) -> Option<Content<'a>> {
                let next = self.doc.tree.borrow()[self.id].next;
                next.map(|id| Content::from_id(id, self.doc))
            }

            pub fn previous_node(&self) -> Option<Content<'a>> {
                let previous = self.doc.tree.borrow()[self.id].previous;
                previous.map(|id| Content::from_id(id, self.doc))
            }
        }
    };
}

leaf_methods!(Text, Text);
leaf_methods!(Comment, Comment);
