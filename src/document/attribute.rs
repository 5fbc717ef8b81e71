/*
** This file is a part of HtmlGen (markup tree builder)
** Copyright (C) 2000-2025 Gurer Ozen
**
** HtmlGen is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

use super::AttributeData;
use super::Document;
use super::NodeId;
use super::NodePayload;
use super::content::node_handle;

/// Handle to an attribute node.
///
/// An attribute without a value is a void attribute like `disabled`.
/// Once a value is set it cannot be made void again.
#[derive(Clone, Copy)]
pub struct Attribute<'a> {
    pub(super) id: NodeId,
    pub(super) doc: &'a Document,
}

node_handle!(Attribute, Attribute);

impl<'a> Attribute<'a> {
    fn with_data<R>(&self, f: impl FnOnce(&AttributeData) -> R) -> R {
        let tree = self.doc.tree.borrow();
        match &tree[self.id].payload {
            NodePayload::Attribute(data) => f(data),
            // Attribute handles are only made for attribute nodes
            _ => unreachable!(),
        }
    }

    pub fn name(&self) -> String {
        self.with_data(|data| data.name.clone())
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.with_data(|data| data.name == name)
    }

    pub fn value(&self) -> Option<String> {
        self.with_data(|data| data.value.clone())
    }

    pub fn is_void(&self) -> bool {
        self.with_data(|data| data.value.is_none())
    }

    /// Sets the value, an empty string included.
    pub fn set_value(&self, value: &str) {
        let mut tree = self.doc.tree.borrow_mut();
        if let NodePayload::Attribute(data) = &mut tree[self.id].payload {
            data.value = Some(value.to_string());
        }
    }

    pub fn next_attribute(&self) -> Option<Attribute<'a>> {
        let next = self.doc.tree.borrow()[self.id].next;
        next.map(|id| Attribute::new(id, self.doc))
    }

    pub fn previous_attribute(&self) -> Option<Attribute<'a>> {
        let previous = self.doc.tree.borrow()[self.id].previous;
        previous.map(|id| Attribute::new(id, self.doc))
    }
}
