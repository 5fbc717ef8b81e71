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
use super::Comment;
use super::Document;
use super::Element;
use super::NodeId;
use super::SerializeOptions;
use super::Text;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum NodeKind {
    Attribute,
    Element,
    Text,
    Comment,
}

/// Capabilities shared by every kind of node handle.
pub trait Node<'a> {
    fn kind(&self) -> NodeKind;

    /// The element holding this node, if it is attached.
    fn parent(&self) -> Option<Element<'a>>;

    /// Detaches the node from its parent. Does nothing on a detached node.
    fn remove_from_parent(&self);

    fn serialize_with(&self, options: &SerializeOptions) -> String;

    fn serialize(&self) -> String {
        self.serialize_with(&SerializeOptions::default())
    }

    fn document(&self) -> &'a Document;

    /// The node as a `Content` value.
    fn content(&self) -> Content<'a>;

    /// True if both handles refer to the very same node.
    ///
    /// This is identity, unlike `==` which compares the structure.
    fn same_node<N: Node<'a>>(&self, other: &N) -> bool
    where
        Self: Sized,
    {
        let this = self.content();
        let other = other.content();
        this.id() == other.id() && std::ptr::eq(this.doc(), other.doc())
    }
}

/// Generates the boilerplate every handle type shares.
macro_rules! node_handle {
    ($handle:ident, $kind:ident) => {
        impl<'a> $handle<'a> {
            pub(super) fn new(id: super::NodeId, doc: &'a super::Document) -> Self {
                $handle { id, doc }
            }
        }

        impl<'a> super::Node<'a> for $handle<'a> {
            fn kind(&self) -> super::NodeKind {
                super::NodeKind::$kind
            }

            fn parent(&self) -> Option<super::Element<'a>> {
                let tree = self.doc.tree.borrow();
                tree[self.id]
                    .parent
                    .map(|parent| super::Element::new(parent, self.doc))
            }

            fn remove_from_parent(&self) {
                self.doc.tree.borrow_mut().unlink(self.id);
            }

            fn serialize_with(&self, options: &super::SerializeOptions) -> String {
                let tree = self.doc.tree.borrow();
                super::serializer::render(&tree, self.id, options)
            }

            fn document(&self) -> &'a super::Document {
                self.doc
            }

            fn content(&self) -> super::Content<'a> {
                super::Content::$kind(*self)
            }
        }

        impl PartialEq for $handle<'_> {
            fn eq(&self, other: &Self) -> bool {
                // Shared borrows, so this works for the same document too
                let tree = self.doc.tree.borrow();
                let other_tree = other.doc.tree.borrow();
                tree.deep_eq(self.id, &other_tree, other.id)
            }
        }

        impl std::fmt::Debug for $handle<'_> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{} ({:?})", stringify!($handle), self.id)
            }
        }

        impl std::fmt::Display for $handle<'_> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let tree = self.doc.tree.borrow();
                let options = super::SerializeOptions::default();
                super::serializer::write_node(&tree, self.id, &options, f)
            }
        }

        impl<'a> From<$handle<'a>> for super::Content<'a> {
            fn from(node: $handle<'a>) -> Self {
                super::Content::$kind(node)
            }
        }
    };
}

pub(super) use node_handle;

/// Any node which can be added to an element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Content<'a> {
    Element(Element<'a>),
    Attribute(Attribute<'a>),
    Text(Text<'a>),
    Comment(Comment<'a>),
}

impl<'a> Content<'a> {
    pub(super) fn id(&self) -> NodeId {
        match self {
            Content::Element(node) => node.id,
            Content::Attribute(node) => node.id,
            Content::Text(node) => node.id,
            Content::Comment(node) => node.id,
        }
    }

    pub(super) fn doc(&self) -> &'a Document {
        match self {
            Content::Element(node) => node.doc,
            Content::Attribute(node) => node.doc,
            Content::Text(node) => node.doc,
            Content::Comment(node) => node.doc,
        }
    }

    pub(super) fn from_id(id: NodeId, doc: &'a Document) -> Content<'a> {
        let tree = doc.tree.borrow();
        match tree[id].payload {
            super::NodePayload::Tag(_) => Content::Element(Element::new(id, doc)),
            super::NodePayload::Attribute(_) => Content::Attribute(Attribute::new(id, doc)),
            super::NodePayload::Text(_) => Content::Text(Text::new(id, doc)),
            super::NodePayload::Comment(_) => Content::Comment(Comment::new(id, doc)),
        }
    }

    pub fn is_attribute(&self) -> bool {
        matches!(self, Content::Attribute(_))
    }

    pub fn as_element(&self) -> Option<Element<'a>> {
        match self {
            Content::Element(element) => Some(*element),
            _ => None,
        }
    }

    pub fn as_attribute(&self) -> Option<Attribute<'a>> {
        match self {
            Content::Attribute(attribute) => Some(*attribute),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<Text<'a>> {
        match self {
            Content::Text(text) => Some(*text),
            _ => None,
        }
    }

    pub fn as_comment(&self) -> Option<Comment<'a>> {
        match self {
            Content::Comment(comment) => Some(*comment),
            _ => None,
        }
    }
}

impl<'a> Node<'a> for Content<'a> {
    fn kind(&self) -> NodeKind {
        match self {
            Content::Element(node) => node.kind(),
            Content::Attribute(node) => node.kind(),
            Content::Text(node) => node.kind(),
            Content::Comment(node) => node.kind(),
        }
    }

    fn parent(&self) -> Option<Element<'a>> {
        match self {
            Content::Element(node) => node.parent(),
            Content::Attribute(node) => node.parent(),
            Content::Text(node) => node.parent(),
            Content::Comment(node) => node.parent(),
        }
    }

    fn remove_from_parent(&self) {
        match self {
            Content::Element(node) => node.remove_from_parent(),
            Content::Attribute(node) => node.remove_from_parent(),
            Content::Text(node) => node.remove_from_parent(),
            Content::Comment(node) => node.remove_from_parent(),
        }
    }

    fn serialize_with(&self, options: &SerializeOptions) -> String {
        match self {
            Content::Element(node) => node.serialize_with(options),
            Content::Attribute(node) => node.serialize_with(options),
            Content::Text(node) => node.serialize_with(options),
            Content::Comment(node) => node.serialize_with(options),
        }
    }

    fn document(&self) -> &'a Document {
        self.doc()
    }

    fn content(&self) -> Content<'a> {
        *self
    }
}

impl std::fmt::Display for Content<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Content::Element(node) => std::fmt::Display::fmt(node, f),
            Content::Attribute(node) => std::fmt::Display::fmt(node, f),
            Content::Text(node) => std::fmt::Display::fmt(node, f),
            Content::Comment(node) => std::fmt::Display::fmt(node, f),
        }
    }
}
