/*
** This file is a part of HtmlGen (markup tree builder)
** Copyright (C) 2000-2025 Gurer Ozen
**
** HtmlGen is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

use std::fmt::Write;

pub mod predefined {
    pub const LT: &str = "&lt;";
    pub const GT: &str = "&gt;";
    pub const AMP: &str = "&amp;";
}

/// Size of the text after `escape_text`.
pub fn escaped_size(s: &str) -> usize {
    let mut size = 0;
    for c in s.chars() {
        match c {
            '<' => size += predefined::LT.len(),
            '>' => size += predefined::GT.len(),
            '&' => size += predefined::AMP.len(),
            _ => size += c.len_utf8(),
        }
    }

    size
}

/// Writes character data with the markup characters replaced by entities.
pub fn escape_text<W: Write>(s: &str, w: &mut W) -> std::fmt::Result {
    let mut start = 0;
    for (i, c) in s.char_indices() {
        let entity = match c {
            '<' => predefined::LT,
            '>' => predefined::GT,
            '&' => predefined::AMP,
            _ => continue,
        };
        w.write_str(&s[start..i])?;
        w.write_str(entity)?;
        start = i + 1;
    }
    w.write_str(&s[start..])
}

/// Writes an attribute value so it can sit between double quotes.
///
/// Quote and backslash are backslash escaped, control characters use
/// their short form when there is one and `\u{..}` otherwise.
pub fn escape_attribute<W: Write>(s: &str, w: &mut W) -> std::fmt::Result {
    let mut start = 0;
    for (i, c) in s.char_indices() {
        if c != '"' && c != '\\' && !c.is_control() {
            continue;
        }
        w.write_str(&s[start..i])?;
        match c {
            '"' => w.write_str("\\\"")?,
            '\\' => w.write_str("\\\\")?,
            '\n' => w.write_str("\\n")?,
            '\r' => w.write_str("\\r")?,
            '\t' => w.write_str("\\t")?,
            _ => write!(w, "\\u{{{:x}}}", c as u32)?,
        }
        start = i + c.len_utf8();
    }
    w.write_str(&s[start..])
}

/// Writes comment text so that it cannot end the comment early.
///
/// Only a `>` which would close the comment (after `--`, `--!`, or at
/// the very start) is replaced by an entity; everything else is verbatim.
pub fn escape_comment<W: Write>(s: &str, w: &mut W) -> std::fmt::Result {
    let mut start = 0;
    for (i, c) in s.char_indices() {
        if c != '>' {
            continue;
        }
        let before = &s[..i];
        if i == 0 || before == "-" || before.ends_with("--") || before.ends_with("--!") {
            w.write_str(&s[start..i])?;
            w.write_str(predefined::GT)?;
            start = i + 1;
        }
    }
    w.write_str(&s[start..])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> String {
        let mut buf = String::new();
        escape_text(s, &mut buf).unwrap();
        buf
    }

    fn comment(s: &str) -> String {
        let mut buf = String::new();
        escape_comment(s, &mut buf).unwrap();
        buf
    }

    fn attr(s: &str) -> String {
        let mut buf = String::new();
        escape_attribute(s, &mut buf).unwrap();
        buf
    }

    #[test]
    fn escape_size() {
        const NOESCAPE: &str = "abc$#@!%^*(){}[]=-+/.,;:FDSF3443";
        assert_eq!(escaped_size(NOESCAPE), NOESCAPE.len());
        assert_eq!(escaped_size("abc&def"), "abc&amp;def".len());
        assert_eq!(escaped_size("<>&"), "&lt;&gt;&amp;".len());
        assert_eq!(escaped_size("ğüş<"), text("ğüş<").len());
    }

    #[test]
    fn text_escapes() {
        assert_eq!(text(""), "");
        assert_eq!(text("plain"), "plain");
        assert_eq!(text("a<b>c&d"), "a&lt;b&gt;c&amp;d");
        assert_eq!(text("\"quotes\" stay"), "\"quotes\" stay");
        assert_eq!(text("çay & simit"), "çay &amp; simit");
    }

    #[test]
    fn attribute_escapes() {
        assert_eq!(attr("value"), "value");
        assert_eq!(attr("a\"b"), "a\\\"b");
        assert_eq!(attr("back\\slash"), "back\\\\slash");
        assert_eq!(attr("line\nbreak\r\tend"), "line\\nbreak\\r\\tend");
        assert_eq!(attr("bell\u{7}"), "bell\\u{7}");
        assert_eq!(attr("<&>"), "<&>");
        assert_eq!(attr("ünïcode\""), "ünïcode\\\"");
    }

    #[test]
    fn comment_escapes() {
        assert_eq!(comment("plain <b> & -- text"), "plain <b> & -- text");
        assert_eq!(comment("a-->b"), "a--&gt;b");
        assert_eq!(comment("a--!>b"), "a--!&gt;b");
        assert_eq!(comment(">x"), "&gt;x");
        assert_eq!(comment("->x"), "-&gt;x");
        assert_eq!(comment("a->b"), "a->b");
        assert_eq!(comment("-->-->"), "--&gt;--&gt;");
    }
}
