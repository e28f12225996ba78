use std::borrow::Cow;

use quick_xml::escape::resolve_html5_entity;

/// Longest reference body we look at before giving up on a `&`.
const MAX_REFERENCE_LEN: usize = 32;

/// Names HTML5 still decodes without a trailing `;` (`&amp`, `&nbsp`, `&copy`).
const LEGACY_ENTITIES: &[&str] = &[
    "AElig", "AMP", "Aacute", "Acirc", "Agrave", "Aring", "Atilde", "Auml", "COPY", "Ccedil",
    "ETH", "Eacute", "Ecirc", "Egrave", "Euml", "GT", "Iacute", "Icirc", "Igrave", "Iuml", "LT",
    "Ntilde", "Oacute", "Ocirc", "Ograve", "Oslash", "Otilde", "Ouml", "QUOT", "REG", "THORN",
    "Uacute", "Ucirc", "Ugrave", "Uuml", "Yacute", "aacute", "acirc", "acute", "aelig", "agrave",
    "amp", "aring", "atilde", "auml", "brvbar", "ccedil", "cedil", "cent", "copy", "curren",
    "deg", "divide", "eacute", "ecirc", "egrave", "eth", "euml", "frac12", "frac14", "frac34",
    "gt", "iacute", "icirc", "iexcl", "igrave", "iquest", "iuml", "laquo", "lt", "macr", "micro",
    "middot", "nbsp", "not", "ntilde", "oacute", "ocirc", "ograve", "ordf", "ordm", "oslash",
    "otilde", "ouml", "para", "plusmn", "pound", "quot", "raquo", "reg", "sect", "shy", "sup1",
    "sup2", "sup3", "szlig", "thorn", "times", "uacute", "ucirc", "ugrave", "uml", "uuml",
    "yacute", "yen", "yuml",
];

/// Decode HTML character references (`&nbsp;`, `&#1052;`, `&#x41C;`) in a
/// text chunk.
///
/// Each reference is decoded on its own so one bad reference (or a bare
/// `&`) leaves the rest of the chunk intact. Numeric references and the
/// legacy named set decode without their `;`, the way browsers read them.
/// Anything else is kept verbatim.
pub fn decode_entities(raw: &str) -> Cow<'_, str> {
    if !raw.contains('&') {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let candidate = &rest[amp..];

        let consumed = match decode_reference(candidate, &mut out) {
            Some(len) => len,
            None => {
                out.push('&');
                1
            }
        };
        rest = &candidate[consumed..];
    }

    out.push_str(rest);
    Cow::Owned(out)
}

/// Decode the reference at the start of `candidate` (which begins with `&`)
/// into `out`, returning how many bytes it used.
fn decode_reference(candidate: &str, out: &mut String) -> Option<usize> {
    let body = &candidate[1..];

    if let Some(number) = body.strip_prefix('#') {
        let (ch, len) = numeric_reference(number)?;
        out.push(ch);
        return Some(2 + len);
    }

    if let Some(name) = terminated_name(body) {
        if let Some(decoded) = resolve_html5_entity(name) {
            out.push_str(decoded);
            return Some(name.len() + 2);
        }
    }

    let name = legacy_prefix(body)?;
    out.push_str(resolve_html5_entity(name)?);
    Some(name.len() + 1)
}

/// `name` of a `name;` reference body.
fn terminated_name(body: &str) -> Option<&str> {
    let (idx, c) = body
        .char_indices()
        .take(MAX_REFERENCE_LEN)
        .find(|&(_, c)| !c.is_ascii_alphanumeric())?;
    (c == ';' && idx > 0).then(|| &body[..idx])
}

/// Longest legacy entity name the body starts with.
fn legacy_prefix(body: &str) -> Option<&str> {
    let run = body
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(body.len())
        .min(MAX_REFERENCE_LEN);
    (2..=run)
        .rev()
        .map(|end| &body[..end])
        .find(|name| LEGACY_ENTITIES.contains(name))
}

/// Decimal or `x`-prefixed hex digits with an optional `;`. Code points that
/// are not valid characters (and NUL) become U+FFFD.
fn numeric_reference(number: &str) -> Option<(char, usize)> {
    let (radix, skip) = match number.as_bytes().first() {
        Some(b'x' | b'X') => (16, 1),
        _ => (10, 0),
    };
    let digits = number[skip..]
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(number.len() - skip);
    if digits == 0 {
        return None;
    }

    let end = skip + digits;
    let ch = u32::from_str_radix(&number[skip..end], radix)
        .ok()
        .and_then(char::from_u32)
        .filter(|&c| c != '\0')
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    let len = if number[end..].starts_with(';') { end + 1 } else { end };
    Some((ch, len))
}
