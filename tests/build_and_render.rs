/*
** This file is a part of HtmlGen (markup tree builder)
** Copyright (C) 2000-2025 Gurer Ozen
**
** HtmlGen is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

use htmlgen::Content;
use htmlgen::Document;
use htmlgen::DocumentError;
use htmlgen::Element;
use htmlgen::Node;
use htmlgen::NodeKind;
use htmlgen::SerializeOptions;
use htmlgen::VOID_ELEMENTS;
use htmlgen::is_void_tag;

fn page(doc: &Document) -> Result<Element<'_>, DocumentError> {
    let head = doc.element_with(
        "head",
        [
            doc.html_element("meta")?.with_attribute("charset", "utf-8")?,
            doc.element_with_text("title", "Fish & Chips")?,
        ],
    )?;
    let nav = doc.element("nav")?.with_all([
        doc.element_with_text("a", "Home")?.with_attribute("href", "/")?,
        doc.element_with_text("a", "Menu")?.with_attribute("href", "/menu")?,
    ])?;
    let body = doc
        .element("body")?
        .with(nav)?
        .with(doc.comment(" main "))?
        .with(doc.element_with_text("p", "Open <daily>")?)?;
    doc.element("html")?
        .with_attribute("lang", "en")?
        .with_all([head, body])
}

#[test]
fn full_page() -> Result<(), DocumentError> {
    let doc = Document::new();
    let html = page(&doc)?;

    assert_eq!(
        html.serialize(),
        "<html lang=\"en\">\n\
         \t<head>\n\
         \t\t<meta charset=\"utf-8\">\n\
         \t\t<title>Fish &amp; Chips</title>\n\
         \t</head>\n\
         \t<body>\n\
         \t\t<nav>\n\
         \t\t\t<a href=\"/\">Home</a>\n\
         \t\t\t<a href=\"/menu\">Menu</a>\n\
         \t\t</nav><!-- main -->\n\
         \t\t<p>Open &lt;daily&gt;</p>\n\
         \t</body>\n\
         </html>"
    );
    assert_eq!(
        html.serialize_with(&SerializeOptions::NO_FORMATTING),
        "<html lang=\"en\"><head><meta charset=\"utf-8\"><title>Fish &amp; Chips</title></head>\
         <body><nav><a href=\"/\">Home</a><a href=\"/menu\">Menu</a></nav><!-- main -->\
         <p>Open &lt;daily&gt;</p></body></html>"
    );
    assert_eq!(html.to_string(), html.serialize());
    Ok(())
}

#[test]
fn queries_on_page() -> Result<(), DocumentError> {
    let doc = Document::new();
    let html = page(&doc)?;

    let links: Vec<Option<String>> = html
        .descendants_by_tag("a")
        .map(|a| a.attribute_value("href").flatten())
        .collect();
    assert_eq!(links, [Some("/".to_string()), Some("/menu".to_string())]);

    let title = html
        .find_element("head")
        .and_then(|head| head.find_element("title"))
        .and_then(|title| title.inner_text());
    assert_eq!(title.as_deref(), Some("Fish & Chips"));

    let second = html
        .descendants_by_tag("a")
        .nth(1)
        .ok_or(DocumentError::InvalidState("missing link"))?;
    let path: Vec<String> = second.ancestors().map(|element| element.tag()).collect();
    assert_eq!(path, ["nav", "body", "html"]);
    assert!(second.root().same_node(&html));

    let body = html.find_element("body").ok_or(DocumentError::InvalidState("missing body"))?;
    let kinds: Vec<NodeKind> = body.nodes().map(|node| node.kind()).collect();
    assert_eq!(kinds, [NodeKind::Element, NodeKind::Comment, NodeKind::Element]);
    Ok(())
}

#[test]
fn remove_span_from_div() -> Result<(), DocumentError> {
    let doc = Document::new();
    let div = doc.element_with("div", [doc.element("span")?])?;
    let span = div.elements().next().ok_or(DocumentError::InvalidState("no span"))?;

    span.remove_from_parent();
    assert!(!div.has_elements());
    assert!(span.parent().is_none());
    assert_eq!(div.serialize(), "<div></div>");
    Ok(())
}

#[test]
fn move_subtree_between_parents() -> Result<(), DocumentError> {
    let doc = Document::new();
    let left = doc.element("left")?;
    let right = doc.element("right")?;
    let item = doc.element_with("item", [doc.text("x")])?;
    left.add(item)?;

    right.add_first(item)?;
    assert!(!left.has_nodes());
    assert_eq!(
        right.serialize_with(&SerializeOptions::NO_FORMATTING),
        "<right><item>x</item></right>"
    );

    // An ancestor cannot go under its own descendant
    assert!(matches!(item.add(right), Err(DocumentError::InvalidState(_))));
    assert!(item.parent().is_some_and(|parent| parent.same_node(&right)));
    Ok(())
}

#[test]
fn generic_nodes() -> Result<(), DocumentError> {
    fn render_all<'a>(nodes: &[Content<'a>]) -> Vec<String> {
        nodes
            .iter()
            .map(|node| node.serialize_with(&SerializeOptions::NO_FORMATTING))
            .collect()
    }

    let doc = Document::new();
    let nodes = [
        Content::from(doc.element("b")?),
        doc.attribute_with_value("x", "1")?.into(),
        doc.text("<t>").into(),
        doc.comment("c").into(),
    ];
    assert_eq!(render_all(&nodes), ["<b></b>", "x=\"1\"", "&lt;t&gt;", "<!--c-->"]);
    assert!(nodes.iter().all(|node| node.parent().is_none()));
    Ok(())
}

#[test]
fn void_table() {
    assert!(VOID_ELEMENTS.iter().all(|tag| is_void_tag(tag)));
    assert!(is_void_tag("Img"));
    assert!(!is_void_tag("span"));
}
