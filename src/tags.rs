/*
** This file is a part of HtmlGen (markup tree builder)
** Copyright (C) 2000-2025 Gurer Ozen
**
** HtmlGen is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

/// HTML elements which can never have content, sorted for binary search.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "keygen", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Returns true if the tag is a void element in HTML.
///
/// The comparison ignores ASCII case since HTML tag names do.
pub fn is_void_tag(tag: &str) -> bool {
    let tag = tag.trim();
    VOID_ELEMENTS
        .binary_search_by(|probe| {
            probe
                .bytes()
                .cmp(tag.bytes().map(|b| b.to_ascii_lowercase()))
        })
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted() {
        assert!(VOID_ELEMENTS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn void_lookup() {
        assert!(is_void_tag("br"));
        assert!(is_void_tag("BR"));
        assert!(is_void_tag("img"));
        assert!(is_void_tag("wbr"));
        assert!(is_void_tag("area"));
        assert!(!is_void_tag("div"));
        assert!(!is_void_tag("b"));
        assert!(!is_void_tag(""));
        assert!(!is_void_tag("brr"));
    }
}
