/*
** This file is a part of HtmlGen (markup tree builder)
** Copyright (C) 2000-2025 Gurer Ozen
**
** HtmlGen is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

use std::collections::HashSet;

use tracing::debug;

use super::Ancestors;
use super::Attribute;
use super::Attributes;
use super::ChainKind;
use super::Content;
use super::Descendants;
use super::Document;
use super::DocumentError;
use super::Elements;
use super::NodeId;
use super::Nodes;
use super::Tag;
use super::Tree;
use super::content::node_handle;
use super::error::description;

/// Handle to an element node.
///
/// An element has an ordered list of attributes and a separate ordered
/// list of content nodes (elements, text and comments). Void elements
/// never have content nodes.
#[derive(Clone, Copy)]
pub struct Element<'a> {
    pub(super) id: NodeId,
    pub(super) doc: &'a Document,
}

node_handle!(Element, Element);

enum Position {
    First,
    Last,
}

impl<'a> Element<'a> {
    fn with_tag<R>(&self, f: impl FnOnce(&Tag) -> R) -> R {
        let tree = self.doc.tree.borrow();
        match tree.tag(self.id) {
            Some(tag) => f(tag),
            // Element handles are only made for tag nodes
            None => unreachable!(),
        }
    }

    fn with_tag_mut<R>(&self, f: impl FnOnce(&mut Tag) -> R) -> R {
        let mut tree = self.doc.tree.borrow_mut();
        match tree[self.id].tag_mut() {
            Some(tag) => f(tag),
            None => unreachable!(),
        }
    }

    //
    // Properties
    //

    pub fn tag(&self) -> String {
        self.with_tag(|tag| tag.name.clone())
    }

    pub fn has_tag(&self, name: &str) -> bool {
        self.with_tag(|tag| tag.name == name)
    }

    pub fn is_void(&self) -> bool {
        self.with_tag(|tag| tag.is_void)
    }

    pub fn inner_text(&self) -> Option<String> {
        self.with_tag(|tag| tag.inner_text.clone())
    }

    /// Sets or clears the text rendered right after the opening tag.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::InvalidState` for void elements.
    pub fn set_inner_text(&self, text: Option<&str>) -> Result<(), DocumentError> {
        self.with_tag_mut(|tag| {
            if tag.is_void {
                return Err(DocumentError::InvalidState(description::VOID_INNER_TEXT));
            }
            tag.inner_text = text.map(str::to_string);
            Ok(())
        })
    }

    pub fn minimum_indent_depth(&self) -> usize {
        self.with_tag(|tag| tag.min_indent)
    }

    pub fn maximum_indent_depth(&self) -> usize {
        self.with_tag(|tag| tag.max_indent)
    }

    /// Sets the smallest depth at which this element goes on its own line.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::OutOfRange` if the value is greater than
    /// the maximum indent depth.
    pub fn set_minimum_indent_depth(&self, value: usize) -> Result<(), DocumentError> {
        self.with_tag_mut(|tag| {
            if value > tag.max_indent {
                return Err(DocumentError::OutOfRange {
                    param: "minimum_indent_depth",
                    value,
                });
            }
            tag.min_indent = value;
            Ok(())
        })
    }

    /// Sets the largest depth at which this element goes on its own line.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::OutOfRange` if the value is zero or less
    /// than the minimum indent depth.
    pub fn set_maximum_indent_depth(&self, value: usize) -> Result<(), DocumentError> {
        self.with_tag_mut(|tag| {
            if value < 1 || value < tag.min_indent {
                return Err(DocumentError::OutOfRange {
                    param: "maximum_indent_depth",
                    value,
                });
            }
            tag.max_indent = value;
            Ok(())
        })
    }

    pub fn has_elements(&self) -> bool {
        self.first_element().is_some()
    }

    pub fn has_nodes(&self) -> bool {
        self.with_tag(|tag| tag.children.first.is_some())
    }

    pub fn has_attributes(&self) -> bool {
        self.with_tag(|tag| tag.attributes.first.is_some())
    }

    /// True if there are neither content nodes nor attributes.
    pub fn is_empty(&self) -> bool {
        self.with_tag(|tag| tag.children.first.is_none() && tag.attributes.first.is_none())
    }

    //
    // Edit methods
    //

    /// Checks that all of `items` can be attached to this element.
    ///
    /// Nothing is modified, so the caller can rely on the following
    /// `attach` to succeed for every item.
    fn check_content(&self, tree: &Tree, items: &[Content<'a>]) -> Result<(), DocumentError> {
        for item in items {
            if !std::ptr::eq(item.doc(), self.doc) {
                return Err(DocumentError::ForeignNode { param: "content" });
            }
        }
        let is_void = tree.tag(self.id).is_some_and(|tag| tag.is_void);
        let mut seen = HashSet::with_capacity(items.len());
        for item in items {
            let id = item.id();
            if id == self.id {
                return Err(DocumentError::InvalidState(description::SELF_ATTACH));
            }
            if tree[id].parent == Some(self.id) || !seen.insert(id) {
                return Err(DocumentError::InvalidState(description::DUPLICATE_CHILD));
            }
            if !item.is_attribute() {
                if is_void {
                    return Err(DocumentError::InvalidState(description::VOID_CHILDREN));
                }
                if tree.is_ancestor_or_self(id, self.id) {
                    return Err(DocumentError::InvalidState(description::ANCESTOR_ATTACH));
                }
            }
        }
        Ok(())
    }

    /// Moves checked items under this element, keeping their order.
    fn attach(&self, tree: &mut Tree, items: &[Content<'a>], position: Position) {
        let mut child_anchor = None;
        let mut attribute_anchor = None;
        for item in items {
            let id = item.id();
            tree.unlink(id);
            let kind = tree[id].chain_kind();
            let anchor = match position {
                Position::Last => tree.chain(self.id, kind).last,
                Position::First => match kind {
                    ChainKind::Children => child_anchor,
                    ChainKind::Attributes => attribute_anchor,
                },
            };
            tree.link_after(self.id, id, anchor);
            match kind {
                ChainKind::Children => child_anchor = Some(id),
                ChainKind::Attributes => attribute_anchor = Some(id),
            }
        }
    }

    fn insert(&self, items: &[Content<'a>], position: Position) -> Result<(), DocumentError> {
        let mut tree = self.doc.tree.borrow_mut();
        self.check_content(&tree, items)?;
        self.attach(&mut tree, items, position);
        Ok(())
    }

    /// Appends a node to the matching list of this element.
    ///
    /// A node attached elsewhere is moved here.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::InvalidState` if the node is this element,
    /// one of its ancestors, already its child, or a content node while
    /// this element is void. Returns `DocumentError::ForeignNode` if the
    /// node is from another document.
    pub fn add<C: Into<Content<'a>>>(&self, content: C) -> Result<(), DocumentError> {
        self.insert(&[content.into()], Position::Last)
    }

    /// Appends several nodes in the given order.
    ///
    /// The whole batch is checked first, so either every node is added
    /// or none is.
    pub fn add_all<I, C>(&self, content: I) -> Result<(), DocumentError>
    where
        I: IntoIterator<Item = C>,
        C: Into<Content<'a>>,
    {
        let items: Vec<Content<'a>> = content.into_iter().map(Into::into).collect();
        self.insert(&items, Position::Last)
    }

    /// Inserts a node at the front of the matching list of this element.
    pub fn add_first<C: Into<Content<'a>>>(&self, content: C) -> Result<(), DocumentError> {
        self.insert(&[content.into()], Position::First)
    }

    /// Inserts several nodes at the front, keeping the batch order.
    pub fn add_first_all<I, C>(&self, content: I) -> Result<(), DocumentError>
    where
        I: IntoIterator<Item = C>,
        C: Into<Content<'a>>,
    {
        let items: Vec<Content<'a>> = content.into_iter().map(Into::into).collect();
        self.insert(&items, Position::First)
    }

    /// Replaces all attributes and content nodes with the given nodes.
    ///
    /// The new nodes are checked against the current children, so passing
    /// an existing child is an error.
    pub fn replace_all<I, C>(&self, content: I) -> Result<(), DocumentError>
    where
        I: IntoIterator<Item = C>,
        C: Into<Content<'a>>,
    {
        let items: Vec<Content<'a>> = content.into_iter().map(Into::into).collect();
        let mut tree = self.doc.tree.borrow_mut();
        self.check_content(&tree, &items)?;
        tree.clear(self.id, ChainKind::Children);
        tree.clear(self.id, ChainKind::Attributes);
        self.attach(&mut tree, &items, Position::Last);
        debug!(element = self.id.0, count = items.len(), "replaced all children");
        Ok(())
    }

    /// Replaces the content nodes, leaving the attributes alone.
    ///
    /// # Errors
    ///
    /// Always fails with `DocumentError::InvalidState` on void elements.
    pub fn replace_elements<I>(&self, elements: I) -> Result<(), DocumentError>
    where
        I: IntoIterator<Item = Element<'a>>,
    {
        if self.is_void() {
            return Err(DocumentError::InvalidState(description::VOID_CLEAR));
        }
        let items: Vec<Content<'a>> = elements.into_iter().map(Content::Element).collect();
        let mut tree = self.doc.tree.borrow_mut();
        self.check_content(&tree, &items)?;
        tree.clear(self.id, ChainKind::Children);
        self.attach(&mut tree, &items, Position::Last);
        debug!(element = self.id.0, count = items.len(), "replaced content nodes");
        Ok(())
    }

    /// Replaces the attributes, leaving the content nodes alone.
    pub fn replace_attributes<I>(&self, attributes: I) -> Result<(), DocumentError>
    where
        I: IntoIterator<Item = Attribute<'a>>,
    {
        let items: Vec<Content<'a>> = attributes.into_iter().map(Content::Attribute).collect();
        let mut tree = self.doc.tree.borrow_mut();
        self.check_content(&tree, &items)?;
        tree.clear(self.id, ChainKind::Attributes);
        self.attach(&mut tree, &items, Position::Last);
        debug!(element = self.id.0, count = items.len(), "replaced attributes");
        Ok(())
    }

    /// Detaches every attribute and content node.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::InvalidState` on void elements.
    pub fn remove_all(&self) -> Result<(), DocumentError> {
        if self.is_void() {
            return Err(DocumentError::InvalidState(description::VOID_CLEAR));
        }
        let mut tree = self.doc.tree.borrow_mut();
        tree.clear(self.id, ChainKind::Children);
        tree.clear(self.id, ChainKind::Attributes);
        debug!(element = self.id.0, "removed all children");
        Ok(())
    }

    /// Detaches every content node.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::InvalidState` on void elements.
    pub fn remove_elements(&self) -> Result<(), DocumentError> {
        if self.is_void() {
            return Err(DocumentError::InvalidState(description::VOID_CLEAR));
        }
        self.doc.tree.borrow_mut().clear(self.id, ChainKind::Children);
        debug!(element = self.id.0, "removed content nodes");
        Ok(())
    }

    /// Detaches every attribute. Allowed on void elements too.
    pub fn remove_attributes(&self) {
        self.doc.tree.borrow_mut().clear(self.id, ChainKind::Attributes);
        debug!(element = self.id.0, "removed attributes");
    }

    //
    // Builder methods
    //

    pub fn with<C: Into<Content<'a>>>(self, content: C) -> Result<Self, DocumentError> {
        self.add(content)?;
        Ok(self)
    }

    pub fn with_all<I, C>(self, content: I) -> Result<Self, DocumentError>
    where
        I: IntoIterator<Item = C>,
        C: Into<Content<'a>>,
    {
        self.add_all(content)?;
        Ok(self)
    }

    pub fn with_attribute(self, name: &str, value: &str) -> Result<Self, DocumentError> {
        let attribute = self.doc.attribute_with_value(name, value)?;
        self.with(attribute)
    }

    pub fn with_void_attribute(self, name: &str) -> Result<Self, DocumentError> {
        let attribute = self.doc.attribute(name)?;
        self.with(attribute)
    }

    pub fn with_inner_text(self, text: &str) -> Result<Self, DocumentError> {
        self.set_inner_text(Some(text))?;
        Ok(self)
    }

    //
    // Navigation methods
    //

    pub fn first_node(&self) -> Option<Content<'a>> {
        self.with_tag(|tag| tag.children.first)
            .map(|id| Content::from_id(id, self.doc))
    }

    pub fn last_node(&self) -> Option<Content<'a>> {
        self.with_tag(|tag| tag.children.last)
            .map(|id| Content::from_id(id, self.doc))
    }

    pub fn first_element(&self) -> Option<Element<'a>> {
        self.elements().next()
    }

    pub fn last_element(&self) -> Option<Element<'a>> {
        let last = self.with_tag(|tag| tag.children.last)?;
        Elements::new(self.doc, Some(last), false, None).next()
    }

    pub fn first_attribute(&self) -> Option<Attribute<'a>> {
        self.with_tag(|tag| tag.attributes.first)
            .map(|id| Attribute::new(id, self.doc))
    }

    pub fn last_attribute(&self) -> Option<Attribute<'a>> {
        self.with_tag(|tag| tag.attributes.last)
            .map(|id| Attribute::new(id, self.doc))
    }

    pub fn next_node(&self) -> Option<Content<'a>> {
        let next = self.doc.tree.borrow()[self.id].next;
        next.map(|id| Content::from_id(id, self.doc))
    }

    pub fn previous_node(&self) -> Option<Content<'a>> {
        let previous = self.doc.tree.borrow()[self.id].previous;
        previous.map(|id| Content::from_id(id, self.doc))
    }

    pub fn next_element(&self) -> Option<Element<'a>> {
        self.next_elements().next()
    }

    pub fn previous_element(&self) -> Option<Element<'a>> {
        self.previous_elements().next()
    }

    /// The topmost ancestor, or the element itself if it is detached.
    pub fn root(&self) -> Element<'a> {
        self.ancestors_and_self().last().unwrap_or(*self)
    }

    /// First child element with the given tag.
    pub fn find_element(&self, tag: &str) -> Option<Element<'a>> {
        self.elements_by_tag(tag).next()
    }

    /// First attribute with the given name.
    pub fn find_attribute(&self, name: &str) -> Option<Attribute<'a>> {
        self.attributes().find(|attribute| attribute.has_name(name))
    }

    /// Value of the first attribute with the given name.
    ///
    /// Void attributes give `Some(None)`.
    pub fn attribute_value(&self, name: &str) -> Option<Option<String>> {
        self.find_attribute(name).map(|attribute| attribute.value())
    }

    //
    // Iterator methods
    //

    pub fn elements(&self) -> Elements<'a, 'static> {
        let first = self.with_tag(|tag| tag.children.first);
        Elements::new(self.doc, first, true, None)
    }

    pub fn elements_by_tag<'t>(&self, tag: &'t str) -> Elements<'a, 't> {
        let first = self.with_tag(|tag| tag.children.first);
        Elements::new(self.doc, first, true, Some(tag))
    }

    /// All content nodes, elements and text alike.
    pub fn nodes(&self) -> Nodes<'a> {
        let first = self.with_tag(|tag| tag.children.first);
        Nodes::new(self.doc, first)
    }

    pub fn attributes(&self) -> Attributes<'a> {
        let first = self.with_tag(|tag| tag.attributes.first);
        Attributes::new(self.doc, first)
    }

    /// Attributes first, then the content nodes.
    pub fn elements_and_attributes(&self) -> impl Iterator<Item = Content<'a>> + use<'a> {
        self.attributes().map(Content::Attribute).chain(self.nodes())
    }

    pub fn next_elements(&self) -> Elements<'a, 'static> {
        let next = self.doc.tree.borrow()[self.id].next;
        Elements::new(self.doc, next, true, None)
    }

    pub fn next_elements_by_tag<'t>(&self, tag: &'t str) -> Elements<'a, 't> {
        let next = self.doc.tree.borrow()[self.id].next;
        Elements::new(self.doc, next, true, Some(tag))
    }

    pub fn previous_elements(&self) -> Elements<'a, 'static> {
        let previous = self.doc.tree.borrow()[self.id].previous;
        Elements::new(self.doc, previous, false, None)
    }

    pub fn previous_elements_by_tag<'t>(&self, tag: &'t str) -> Elements<'a, 't> {
        let previous = self.doc.tree.borrow()[self.id].previous;
        Elements::new(self.doc, previous, false, Some(tag))
    }

    /// Parent chain, nearest first.
    pub fn ancestors(&self) -> Ancestors<'a, 'static> {
        let parent = self.doc.tree.borrow()[self.id].parent;
        Ancestors::new(self.doc, parent, None)
    }

    pub fn ancestors_by_tag<'t>(&self, tag: &'t str) -> Ancestors<'a, 't> {
        let parent = self.doc.tree.borrow()[self.id].parent;
        Ancestors::new(self.doc, parent, Some(tag))
    }

    pub fn ancestors_and_self(&self) -> Ancestors<'a, 'static> {
        Ancestors::new(self.doc, Some(self.id), None)
    }

    pub fn ancestors_and_self_by_tag<'t>(&self, tag: &'t str) -> Ancestors<'a, 't> {
        Ancestors::new(self.doc, Some(self.id), Some(tag))
    }

    /// Pre-order walk of the element subtree, without the element itself.
    pub fn descendants(&self) -> Descendants<'a, 'static> {
        Descendants::new(self.doc, self.id, false, None)
    }

    pub fn descendants_by_tag<'t>(&self, tag: &'t str) -> Descendants<'a, 't> {
        Descendants::new(self.doc, self.id, false, Some(tag))
    }

    pub fn descendants_and_self(&self) -> Descendants<'a, 'static> {
        Descendants::new(self.doc, self.id, true, None)
    }

    pub fn descendants_and_self_by_tag<'t>(&self, tag: &'t str) -> Descendants<'a, 't> {
        Descendants::new(self.doc, self.id, true, Some(tag))
    }
}
