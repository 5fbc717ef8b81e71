/*
** This file is a part of HtmlGen (markup tree builder)
** Copyright (C) 2000-2025 Gurer Ozen
**
** HtmlGen is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

mod attribute;
mod content;
mod element;
mod error;
mod iterators;
mod leaf;
mod serializer;

use std::cell::RefCell;
use std::ops::Index;
use std::ops::IndexMut;

use tracing::trace;

use crate::tags::is_void_tag;
pub use attribute::Attribute;
pub use content::Content;
pub use content::Node;
pub use content::NodeKind;
pub use element::Element;
pub use error::DocumentError;
pub use iterators::Ancestors;
pub use iterators::Attributes;
pub use iterators::Descendants;
pub use iterators::Elements;
pub use iterators::Nodes;
pub use leaf::Comment;
pub use leaf::Text;
pub use serializer::SerializeOptions;

pub(crate) const DEFAULT_MINIMUM_INDENT_DEPTH: usize = 1;
pub(crate) const DEFAULT_MAXIMUM_INDENT_DEPTH: usize = 9;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(usize);

/// First and last node of one of the two child lists of a tag.
#[derive(Clone, Copy, Debug, Default)]
struct Chain {
    first: Option<NodeId>,
    last: Option<NodeId>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ChainKind {
    Children,
    Attributes,
}

struct Tag {
    name: String,
    is_void: bool,
    inner_text: Option<String>,
    children: Chain,
    attributes: Chain,
    min_indent: usize,
    max_indent: usize,
}

impl Tag {
    fn new(name: &str, is_void: bool) -> Tag {
        Tag {
            name: name.to_string(),
            is_void,
            inner_text: None,
            children: Chain::default(),
            attributes: Chain::default(),
            min_indent: DEFAULT_MINIMUM_INDENT_DEPTH,
            max_indent: DEFAULT_MAXIMUM_INDENT_DEPTH,
        }
    }

    fn chain(&self, kind: ChainKind) -> &Chain {
        match kind {
            ChainKind::Children => &self.children,
            ChainKind::Attributes => &self.attributes,
        }
    }

    fn chain_mut(&mut self, kind: ChainKind) -> &mut Chain {
        match kind {
            ChainKind::Children => &mut self.children,
            ChainKind::Attributes => &mut self.attributes,
        }
    }

    fn indents_at(&self, depth: usize) -> bool {
        self.min_indent <= depth && depth <= self.max_indent
    }
}

struct AttributeData {
    name: String,
    value: Option<String>,
}

enum NodePayload {
    Tag(Tag),
    Attribute(AttributeData),
    Text(String),
    Comment(String),
}

struct TreeNode {
    next: Option<NodeId>,
    previous: Option<NodeId>,
    parent: Option<NodeId>,
    payload: NodePayload,
}

impl TreeNode {
    fn chain_kind(&self) -> ChainKind {
        match self.payload {
            NodePayload::Attribute(_) => ChainKind::Attributes,
            _ => ChainKind::Children,
        }
    }

    fn tag(&self) -> Option<&Tag> {
        match &self.payload {
            NodePayload::Tag(tag) => Some(tag),
            _ => None,
        }
    }

    fn tag_mut(&mut self) -> Option<&mut Tag> {
        match &mut self.payload {
            NodePayload::Tag(tag) => Some(tag),
            _ => None,
        }
    }
}

/// Node storage and the sibling/parent link bookkeeping.
///
/// Parents only ever point to tag nodes, and every node sits in at most
/// one chain of its parent. All link edits go through `link_after` and
/// `unlink` so these hold.
#[derive(Default)]
struct Tree {
    nodes: Vec<TreeNode>,
}

impl Index<NodeId> for Tree {
    type Output = TreeNode;

    fn index(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }
}

impl IndexMut<NodeId> for Tree {
    fn index_mut(&mut self, id: NodeId) -> &mut TreeNode {
        &mut self.nodes[id.0]
    }
}

impl Tree {
    fn alloc(&mut self, payload: NodePayload) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode {
            next: None,
            previous: None,
            parent: None,
            payload,
        });
        id
    }

    fn tag(&self, id: NodeId) -> Option<&Tag> {
        self[id].tag()
    }

    fn chain(&self, parent: NodeId, kind: ChainKind) -> Chain {
        match self.tag(parent) {
            Some(tag) => *tag.chain(kind),
            None => Chain::default(),
        }
    }

    fn chain_mut(&mut self, parent: NodeId, kind: ChainKind) -> Option<&mut Chain> {
        self[parent].tag_mut().map(|tag| tag.chain_mut(kind))
    }

    /// True if `candidate` is `node` or one of its ancestors.
    fn is_ancestor_or_self(&self, candidate: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == candidate {
                return true;
            }
            current = self[id].parent;
        }
        false
    }

    fn unlink(&mut self, id: NodeId) {
        let Some(parent) = self[id].parent else {
            return;
        };
        let kind = self[id].chain_kind();
        let previous = self[id].previous;
        let next = self[id].next;

        // Fix siblings
        if let Some(next) = next {
            self[next].previous = previous;
        }
        if let Some(previous) = previous {
            self[previous].next = next;
        }
        // Fix parent
        if let Some(chain) = self.chain_mut(parent, kind) {
            if chain.first == Some(id) {
                chain.first = next;
            }
            if chain.last == Some(id) {
                chain.last = previous;
            }
        }
        // Fix self
        let node = &mut self[id];
        node.parent = None;
        node.next = None;
        node.previous = None;

        trace!(node = id.0, parent = parent.0, "unlinked node");
    }

    /// Links a detached node into the matching chain of `parent`, right
    /// after `anchor`, or at the front when there is no anchor.
    fn link_after(&mut self, parent: NodeId, id: NodeId, anchor: Option<NodeId>) {
        let kind = self[id].chain_kind();
        let next = match anchor {
            Some(anchor) => self[anchor].next,
            None => self.chain(parent, kind).first,
        };

        let node = &mut self[id];
        node.parent = Some(parent);
        node.previous = anchor;
        node.next = next;

        match anchor {
            Some(anchor) => self[anchor].next = Some(id),
            None => {
                if let Some(chain) = self.chain_mut(parent, kind) {
                    chain.first = Some(id);
                }
            }
        }
        match next {
            Some(next) => self[next].previous = Some(id),
            None => {
                if let Some(chain) = self.chain_mut(parent, kind) {
                    chain.last = Some(id);
                }
            }
        }

        trace!(node = id.0, parent = parent.0, "linked node");
    }

    /// Detaches every node of one chain of `parent`.
    fn clear(&mut self, parent: NodeId, kind: ChainKind) {
        let mut current = self.chain(parent, kind).first;
        while let Some(id) = current {
            current = self[id].next;
            let node = &mut self[id];
            node.parent = None;
            node.next = None;
            node.previous = None;
        }
        if let Some(chain) = self.chain_mut(parent, kind) {
            *chain = Chain::default();
        }
    }

    /// Structural equality of two subtrees, possibly in different trees.
    fn deep_eq(&self, a: NodeId, other: &Tree, b: NodeId) -> bool {
        // Pairs still to compare, so deep trees do not grow the call stack
        let mut pending = vec![(a, b)];
        while let Some((x, y)) = pending.pop() {
            let same = match (&self[x].payload, &other[y].payload) {
                (NodePayload::Tag(x), NodePayload::Tag(y)) => {
                    x.name == y.name
                        && x.is_void == y.is_void
                        && x.inner_text == y.inner_text
                        && self.pair_chains(x.attributes, other, y.attributes, &mut pending)
                        && self.pair_chains(x.children, other, y.children, &mut pending)
                }
                (NodePayload::Attribute(x), NodePayload::Attribute(y)) => {
                    x.name == y.name && x.value == y.value
                }
                (NodePayload::Text(x), NodePayload::Text(y)) => x == y,
                (NodePayload::Comment(x), NodePayload::Comment(y)) => x == y,
                _ => false,
            };
            if !same {
                return false;
            }
        }
        true
    }

    /// Queues the nodes of two chains pairwise. False if the lengths differ.
    fn pair_chains(
        &self,
        a: Chain,
        other: &Tree,
        b: Chain,
        pending: &mut Vec<(NodeId, NodeId)>,
    ) -> bool {
        let mut x = a.first;
        let mut y = b.first;
        loop {
            match (x, y) {
                (None, None) => return true,
                (Some(i), Some(j)) => {
                    pending.push((i, j));
                    x = self[i].next;
                    y = other[j].next;
                }
                _ => return false,
            }
        }
    }
}

/// Names must be non-empty and free of whitespace, controls and the
/// characters which would end the name in rendered markup.
fn validate_name(name: &str, param: &'static str) -> Result<(), DocumentError> {
    let bad = |c: char| {
        c.is_whitespace() || c.is_control() || matches!(c, '<' | '>' | '"' | '\'' | '/' | '=')
    };
    if name.is_empty() || name.contains(bad) {
        return Err(DocumentError::InvalidName { param });
    }
    Ok(())
}

/// Storage for markup nodes.
///
/// Every element, attribute, text and comment node is created by a
/// document and lives as long as it. The returned handles are small
/// `Copy` values which borrow the document, and all edits are done via
/// the handles. Nodes start out detached and can be freely moved between
/// parents of the same document.
///
/// A document is meant to be edited from a single thread; it is not
/// `Sync`.
#[derive(Default)]
pub struct Document {
    tree: RefCell<Tree>,
}

impl Document {
    pub fn new() -> Document {
        Document::default()
    }

    fn alloc(&self, payload: NodePayload) -> NodeId {
        self.tree.borrow_mut().alloc(payload)
    }

    /// Number of nodes ever created in this document.
    pub fn nr_nodes(&self) -> usize {
        self.tree.borrow().nodes.len()
    }

    //
    // Construction
    //

    /// Creates a detached normal element.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::InvalidName` if the tag is blank.
    pub fn element(&self, tag: &str) -> Result<Element<'_>, DocumentError> {
        validate_name(tag, "tag")?;
        let id = self.alloc(NodePayload::Tag(Tag::new(tag, false)));
        Ok(Element::new(id, self))
    }

    /// Creates a detached void element, which can hold attributes only.
    pub fn void_element(&self, tag: &str) -> Result<Element<'_>, DocumentError> {
        validate_name(tag, "tag")?;
        let id = self.alloc(NodePayload::Tag(Tag::new(tag, true)));
        Ok(Element::new(id, self))
    }

    /// Creates an element which is void if HTML says the tag is void.
    pub fn html_element(&self, tag: &str) -> Result<Element<'_>, DocumentError> {
        if is_void_tag(tag) {
            self.void_element(tag)
        } else {
            self.element(tag)
        }
    }

    pub fn element_with_text(&self, tag: &str, text: &str) -> Result<Element<'_>, DocumentError> {
        let element = self.element(tag)?;
        element.set_inner_text(Some(text))?;
        Ok(element)
    }

    /// Creates an element and adds the given content to it in order.
    ///
    /// # Errors
    ///
    /// Besides the name check, fails like `Element::add_all` does.
    pub fn element_with<'a, I, C>(
        &'a self,
        tag: &str,
        content: I,
    ) -> Result<Element<'a>, DocumentError>
    where
        I: IntoIterator<Item = C>,
        C: Into<Content<'a>>,
    {
        let element = self.element(tag)?;
        element.add_all(content)?;
        Ok(element)
    }

    /// Creates a detached void attribute, rendered with its name only.
    pub fn attribute(&self, name: &str) -> Result<Attribute<'_>, DocumentError> {
        validate_name(name, "name")?;
        let id = self.alloc(NodePayload::Attribute(AttributeData {
            name: name.to_string(),
            value: None,
        }));
        Ok(Attribute::new(id, self))
    }

    pub fn attribute_with_value(
        &self,
        name: &str,
        value: &str,
    ) -> Result<Attribute<'_>, DocumentError> {
        validate_name(name, "name")?;
        let id = self.alloc(NodePayload::Attribute(AttributeData {
            name: name.to_string(),
            value: Some(value.to_string()),
        }));
        Ok(Attribute::new(id, self))
    }

    pub fn text(&self, value: &str) -> Text<'_> {
        let id = self.alloc(NodePayload::Text(value.to_string()));
        Text::new(id, self)
    }

    pub fn comment(&self, value: &str) -> Comment<'_> {
        let id = self.alloc(NodePayload::Comment(value.to_string()));
        Comment::new(id, self)
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Document ({} nodes)", self.nr_nodes())
    }
}


mod nocompile;
