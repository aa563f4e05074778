//! Plain-text extraction from HTML fragments.

use std::borrow::Cow;

use super::entities::ENTITIES;

/// Longest named reference body (`CounterClockwiseContourIntegral`).
const MAX_ENTITY_LEN: usize = 32;

const REPLACEMENT: char = '\u{FFFD}';

/// Code points 0x80..=0x9F in numeric references are read as windows-1252.
const WINDOWS_1252: [(u32, char); 27] = [
    (0x80, '\u{20AC}'),
    (0x82, '\u{201A}'),
    (0x83, '\u{0192}'),
    (0x84, '\u{201E}'),
    (0x85, '\u{2026}'),
    (0x86, '\u{2020}'),
    (0x87, '\u{2021}'),
    (0x88, '\u{02C6}'),
    (0x89, '\u{2030}'),
    (0x8A, '\u{0160}'),
    (0x8B, '\u{2039}'),
    (0x8C, '\u{0152}'),
    (0x8E, '\u{017D}'),
    (0x91, '\u{2018}'),
    (0x92, '\u{2019}'),
    (0x93, '\u{201C}'),
    (0x94, '\u{201D}'),
    (0x95, '\u{2022}'),
    (0x96, '\u{2013}'),
    (0x97, '\u{2014}'),
    (0x98, '\u{02DC}'),
    (0x99, '\u{2122}'),
    (0x9A, '\u{0161}'),
    (0x9B, '\u{203A}'),
    (0x9C, '\u{0153}'),
    (0x9E, '\u{017E}'),
    (0x9F, '\u{0178}'),
];

/// Decode an HTML fragment to the text it displays.
///
/// - Every named reference in the HTML standard (`&eacute;`, `&amp;`, ...)
///   plus decimal (`&#39;`) and hex (`&#x27;`) references are decoded.
///   Numeric references to NUL, surrogates or beyond U+10FFFF become U+FFFD.
/// - Markup tags and comments are removed; `<br>` becomes a newline.
/// - Anything unrecognised, including a `<` that does not open a tag, is
///   kept as written.
///
/// Input without `&` or `<` is returned unchanged without allocating.
pub fn decode_html_entities(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<']) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    // Once a `<` has no closing `>`, no later `<` can have one either.
    let mut tags_closed = true;

    while let Some(pos) = rest.find(['&', '<']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos + 1..];

        if rest.as_bytes()[pos] == b'&' {
            match decode_reference(tail, &mut out) {
                Some(consumed) => rest = &tail[consumed..],
                None => {
                    out.push('&');
                    rest = tail;
                }
            }
            continue;
        }

        match tags_closed.then(|| strip_tag(tail)).flatten() {
            Some(TagEnd { len, line_break }) => {
                if line_break {
                    out.push('\n');
                }
                rest = &tail[len..];
            }
            None => {
                if opens_tag(tail) {
                    tags_closed = false;
                }
                out.push('<');
                rest = tail;
            }
        }
    }
    out.push_str(rest);

    Cow::Owned(out)
}

struct TagEnd {
    /// Bytes consumed after the `<`, including the `>`.
    len: usize,
    line_break: bool,
}

fn opens_tag(tail: &str) -> bool {
    tail.starts_with(|c: char| c.is_ascii_alphabetic() || c == '/' || c == '!')
}

/// Match the tag or comment following a `<`.
fn strip_tag(tail: &str) -> Option<TagEnd> {
    if !opens_tag(tail) {
        return None;
    }
    if let Some(comment) = tail.strip_prefix("!--") {
        let end = comment.find("-->")?;
        return Some(TagEnd { len: 3 + end + 3, line_break: false });
    }

    let end = tail.find('>')?;
    let name: String = tail[..end]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect();

    Some(TagEnd {
        len: end + 1,
        line_break: name.eq_ignore_ascii_case("br"),
    })
}

/// Decode the reference following a `&` into `out`. Returns the number of
/// bytes consumed, including the trailing `;`.
fn decode_reference(tail: &str, out: &mut String) -> Option<usize> {
    let mut limit = tail.len().min(MAX_ENTITY_LEN + 1);
    while !tail.is_char_boundary(limit) {
        limit -= 1;
    }
    let semi = tail[..limit].find(';')?;
    if semi == 0 {
        return None;
    }
    let body = &tail[..semi];

    if let Some(num) = body.strip_prefix('#') {
        out.push(decode_numeric(num)?);
    } else {
        let idx = ENTITIES
            .binary_search_by(|(name, _)| name.as_bytes().cmp(body.as_bytes()))
            .ok()?;
        out.push_str(ENTITIES[idx].1);
    }

    Some(semi + 1)
}

fn decode_numeric(num: &str) -> Option<char> {
    let (digits, radix) = match num.strip_prefix(['x', 'X']) {
        Some(hex) => (hex, 16),
        None => (num, 10),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    // Too many digits for u32 means out of range
    let code = u32::from_str_radix(digits, radix).unwrap_or(u32::MAX);

    if let Some((_, ch)) = WINDOWS_1252.iter().find(|(c, _)| *c == code) {
        return Some(*ch);
    }
    Some(match code {
        0 => REPLACEMENT,
        _ => char::from_u32(code).unwrap_or(REPLACEMENT),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_text_is_borrowed() {
        let decoded = decode_html_entities("no entities here");
        assert!(matches!(decoded, Cow::Borrowed(_)));
        assert_eq!(decoded, "no entities here");
    }

    #[test]
    fn test_named_entities() {
        assert_eq!(
            decode_html_entities("Tom &amp; Jerry &quot;cartoons&quot;"),
            "Tom & Jerry \"cartoons\""
        );
        assert_eq!(decode_html_entities("Wait&hellip;"), "Wait…");
    }

    #[test]
    fn test_accented_entities() {
        assert_eq!(decode_html_entities("caf&eacute;"), "café");
        assert_eq!(decode_html_entities("sch&ouml;n"), "schön");
        assert_eq!(decode_html_entities("&Aring;ngstr&ouml;m"), "Ångström");
    }

    #[test]
    fn test_entity_names_are_case_sensitive() {
        assert_eq!(decode_html_entities("&AMP;"), "&");
        assert_eq!(decode_html_entities("&Eacute;&eacute;"), "Éé");
        assert_eq!(decode_html_entities("&AmP;"), "&AmP;");
    }

    #[test]
    fn test_longest_entity_name() {
        assert_eq!(decode_html_entities("&CounterClockwiseContourIntegral;"), "∳");
    }

    #[test]
    fn test_multi_code_point_entity() {
        assert_eq!(decode_html_entities("&NotEqualTilde;"), "\u{2242}\u{338}");
    }

    #[test]
    fn test_numeric_entities() {
        assert_eq!(decode_html_entities("it&#39;s"), "it's");
        assert_eq!(decode_html_entities("it&#x27;s"), "it's");
        assert_eq!(decode_html_entities("&#X41;&#66;"), "AB");
    }

    #[test]
    fn test_invalid_code_points_become_replacement() {
        assert_eq!(decode_html_entities("a&#0;b"), "a\u{FFFD}b");
        assert_eq!(decode_html_entities("&#xD800;"), "\u{FFFD}");
        assert_eq!(decode_html_entities("&#x110000;"), "\u{FFFD}");
        assert_eq!(decode_html_entities("&#99999999999;"), "\u{FFFD}");
    }

    #[test]
    fn test_windows_1252_range() {
        assert_eq!(decode_html_entities("&#128;&#150;"), "€–");
    }

    #[test]
    fn test_markup_is_stripped() {
        assert_eq!(decode_html_entities("<b>bold</b> &amp; more"), "bold & more");
        assert_eq!(
            decode_html_entities("<p class=\"x\">Hi<!-- note --></p>"),
            "Hi"
        );
        assert_eq!(decode_html_entities("one<br>two<BR/>three"), "one\ntwo\nthree");
    }

    #[test]
    fn test_escaped_markup_stays_text() {
        assert_eq!(decode_html_entities("&lt;b&gt;not bold&lt;/b&gt;"), "<b>not bold</b>");
    }

    #[test]
    fn test_stray_angle_brackets_kept() {
        assert_eq!(decode_html_entities("1 < 2 > 0"), "1 < 2 > 0");
        assert_eq!(decode_html_entities("a <b unterminated"), "a <b unterminated");
        assert_eq!(decode_html_entities("x <y <i>z</i>"), "x z");
    }

    #[test]
    fn test_unknown_and_malformed_kept() {
        assert_eq!(decode_html_entities("a & b"), "a & b");
        assert_eq!(decode_html_entities("&bogus;"), "&bogus;");
        assert_eq!(decode_html_entities("&amp"), "&amp");
        assert_eq!(decode_html_entities("&;"), "&;");
        assert_eq!(decode_html_entities("&#;&#x;&#12a;"), "&#;&#x;&#12a;");
    }

    #[test]
    fn test_semicolon_search_is_bounded() {
        let far = format!("&amp{};", "x".repeat(MAX_ENTITY_LEN));
        assert_eq!(decode_html_entities(&far), far);

        let many = "&é".repeat(10_000);
        assert_eq!(decode_html_entities(&many), many);
    }

    #[test]
    fn test_double_encoded_decodes_once() {
        assert_eq!(decode_html_entities("&amp;amp;"), "&amp;");
    }

    #[test]
    fn test_entity_table_is_sorted() {
        assert!(ENTITIES.windows(2).all(|w| w[0].0.as_bytes() < w[1].0.as_bytes()));
    }
}
