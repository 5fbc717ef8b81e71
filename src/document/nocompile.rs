/*
** This file is a part of HtmlGen (markup tree builder)
** Copyright (C) 2000-2025 Gurer Ozen
**
** HtmlGen is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

/// # Must not compile tests
///
/// Returned Element cannot outlive the Document:
/// ```compile_fail
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use htmlgen::Document;
/// use htmlgen::Element;
/// let e: Element;
/// {
///     let doc = Document::new();
///     e = doc.element("div")?;
/// }
/// println!("{}", e);
/// # Ok(())
/// # }
/// ```
///
/// Copied handles cannot outlive the Document either:
/// ```compile_fail
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use htmlgen::Document;
/// use htmlgen::Attribute;
/// let a2: Attribute;
/// {
///     let doc = Document::new();
///     let a1 = doc.attribute_with_value("id", "x")?;
///     a2 = a1;
/// }
/// println!("{}", a2);
/// # Ok(())
/// # }
/// ```
///
/// Iterated children cannot outlive the Document:
/// ```compile_fail
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use htmlgen::Document;
/// use htmlgen::Element;
/// let child: Option<Element>;
/// {
///     let doc = Document::new();
///     let ul = doc.element_with("ul", [doc.element("li")?])?;
///     child = ul.elements().next();
/// }
/// println!("{:?}", child);
/// # Ok(())
/// # }
/// ```
///
/// Documents cannot be shared between threads:
/// ```compile_fail
/// use htmlgen::Document;
/// fn shared<T: Sync>(_: &T) {}
/// let doc = Document::new();
/// shared(&doc);
/// ```
///
#[cfg(doctest)]
struct MustNotCompileTests;
