/*
** This file is a part of HtmlGen (markup tree builder)
** Copyright (C) 2000-2025 Gurer Ozen
**
** HtmlGen is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

//! Typed, mutable HTML trees which always stay structurally valid.
//!
//! ```
//! use htmlgen::{Document, Node};
//!
//! # fn main() -> Result<(), htmlgen::DocumentError> {
//! let doc = Document::new();
//! let br = doc.void_element("br")?;
//! br.add(doc.attribute("disabled")?)?;
//! assert_eq!(br.serialize(), "<br disabled>");
//! # Ok(())
//! # }
//! ```

mod document;
mod entities;
mod tags;

pub use document::Ancestors;
pub use document::Attribute;
pub use document::Attributes;
pub use document::Comment;
pub use document::Content;
pub use document::Descendants;
pub use document::Document;
pub use document::DocumentError;
pub use document::Element;
pub use document::Elements;
pub use document::Node;
pub use document::NodeKind;
pub use document::Nodes;
pub use document::SerializeOptions;
pub use document::Text;

pub use tags::VOID_ELEMENTS;
pub use tags::is_void_tag;
