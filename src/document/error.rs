/*
** This file is a part of HtmlGen (markup tree builder)
** Copyright (C) 2000-2025 Gurer Ozen
**
** HtmlGen is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

/// Type of the error returned by document edits.
///
/// Every check happens before the tree is touched, so an error always
/// means the document is exactly as it was before the call.
#[derive(Debug, Eq, PartialEq, Copy, Clone, thiserror::Error)]
pub enum DocumentError {
    /// A node handle given as an argument belongs to a different document.
    #[error("{param}: node belongs to another document")]
    ForeignNode { param: &'static str },

    /// A tag or attribute name was empty, or had whitespace, control or
    /// markup characters in it.
    #[error("{param}: name is empty or has invalid characters")]
    InvalidName { param: &'static str },

    /// The edit would break a structural rule of the tree.
    ///
    /// The message is one of the `description` constants.
    #[error("invalid operation: {0}")]
    InvalidState(&'static str),

    /// An indent depth bound is outside of its allowed range.
    #[error("{param}: value {value} is out of range")]
    OutOfRange { param: &'static str, value: usize },
}

pub(crate) mod description {
    pub(crate) const SELF_ATTACH: &str = "cannot add element to itself";
    pub(crate) const ANCESTOR_ATTACH: &str = "cannot add an ancestor element to its descendant";
    pub(crate) const DUPLICATE_CHILD: &str = "node is already a child of this element";
    pub(crate) const VOID_CHILDREN: &str = "void elements cannot have child nodes";
    pub(crate) const VOID_INNER_TEXT: &str = "void elements cannot have inner text";
    pub(crate) const VOID_CLEAR: &str = "cannot remove child nodes of a void element";
}
