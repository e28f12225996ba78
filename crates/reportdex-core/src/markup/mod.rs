//! Streaming HTML walker that collects `<title>`, `<h1>` and visible text.
//!
//! This is not an HTML parser. It only needs to know whether a text chunk
//! sits inside `<title>` or `<h1>`, so it tracks two flags and never builds
//! a tree. Malformed input never fails; the walker just stops at an
//! unterminated construct.

pub mod entities;

use entities::decode_entities;

/// Text accumulated from one document, in document order.
///
/// Every chunk is trimmed and non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScannedText {
    pub title: Vec<String>,
    pub heading: Vec<String>,
    pub text: Vec<String>,
}

impl ScannedText {
    /// Title chunks joined with single spaces.
    pub fn title_text(&self) -> String {
        self.title.join(" ").trim().to_string()
    }

    /// `<h1>` chunks joined with single spaces.
    pub fn heading_text(&self) -> String {
        self.heading.join(" ").trim().to_string()
    }

    /// All visible chunks joined with single spaces.
    pub fn blob(&self) -> String {
        self.text.join(" ")
    }
}

/// Walk `markup` once and collect its text.
pub fn scan(markup: &str) -> ScannedText {
    let mut scanner = Scanner::default();
    scanner.feed(markup);
    scanner.out
}

#[derive(Default)]
struct Scanner {
    in_title: bool,
    in_heading: bool,
    out: ScannedText,
}

impl Scanner {
    fn feed(&mut self, markup: &str) {
        let mut pos = 0;
        let mut text_start = 0;

        while let Some(found) = markup[pos..].find('<') {
            let lt = pos + found;
            let len = match lex(&markup[lt..]) {
                Lexed::Literal => {
                    pos = lt + 1;
                    continue;
                }
                Lexed::Incomplete => {
                    self.push_text(&markup[text_start..lt]);
                    return;
                }
                Lexed::Skip(len) => {
                    self.push_text(&markup[text_start..lt]);
                    len
                }
                Lexed::EndTag { name, len } => {
                    self.push_text(&markup[text_start..lt]);
                    self.end_tag(name);
                    len
                }
                Lexed::StartTag {
                    name,
                    self_closing,
                    len,
                } => {
                    self.push_text(&markup[text_start..lt]);
                    self.start_tag(name);
                    if self_closing {
                        self.end_tag(name);
                    } else if is_raw_text_element(name) {
                        // <script>/<style> bodies run to the matching close tag
                        let body_start = lt + len;
                        let Some(body_len) = find_close_tag(&markup[body_start..], name) else {
                            return;
                        };
                        self.push_chunk(&markup[body_start..body_start + body_len]);
                        pos = body_start + body_len;
                        text_start = pos;
                        continue;
                    }
                    len
                }
            };
            pos = lt + len;
            text_start = pos;
        }

        self.push_text(&markup[text_start..]);
    }

    fn start_tag(&mut self, name: &str) {
        if name.eq_ignore_ascii_case("title") {
            self.in_title = true;
        } else if name.eq_ignore_ascii_case("h1") {
            self.in_heading = true;
        }
    }

    fn end_tag(&mut self, name: &str) {
        if name.eq_ignore_ascii_case("title") {
            self.in_title = false;
        } else if name.eq_ignore_ascii_case("h1") {
            self.in_heading = false;
        }
    }

    fn push_text(&mut self, raw: &str) {
        if raw.trim().is_empty() {
            return;
        }
        let decoded = decode_entities(raw);
        self.push_chunk(&decoded);
    }

    fn push_chunk(&mut self, chunk: &str) {
        let chunk = chunk.trim();
        if chunk.is_empty() {
            return;
        }
        self.out.text.push(chunk.to_string());
        if self.in_title {
            self.out.title.push(chunk.to_string());
        }
        if self.in_heading {
            self.out.heading.push(chunk.to_string());
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Lexed<'a> {
    /// A `<` that does not open markup; it stays part of the text.
    Literal,
    /// Markup that never closes before end of input.
    Incomplete,
    /// Comment, doctype or processing instruction of this byte length.
    Skip(usize),
    StartTag {
        name: &'a str,
        self_closing: bool,
        len: usize,
    },
    EndTag {
        name: &'a str,
        len: usize,
    },
}

/// Classify the markup construct at the start of `rest` (which begins with `<`).
fn lex(rest: &str) -> Lexed<'_> {
    let after = &rest[1..];

    if let Some(body) = after.strip_prefix("!--") {
        return match body.find("-->") {
            Some(i) => Lexed::Skip("<!--".len() + i + "-->".len()),
            None => Lexed::Incomplete,
        };
    }

    match after.chars().next() {
        Some('!') | Some('?') => skip_to_gt(rest),
        Some('/') => {
            let name_src = &after[1..];
            if !name_src.starts_with(|c: char| c.is_ascii_alphabetic()) {
                return skip_to_gt(rest);
            }
            match rest.find('>') {
                Some(i) => Lexed::EndTag {
                    name: tag_name(name_src),
                    len: i + 1,
                },
                None => Lexed::Incomplete,
            }
        }
        Some(c) if c.is_ascii_alphabetic() => match find_tag_end(rest) {
            Some(i) => Lexed::StartTag {
                name: tag_name(after),
                self_closing: rest[..i].ends_with('/'),
                len: i + 1,
            },
            None => Lexed::Incomplete,
        },
        _ => Lexed::Literal,
    }
}

fn skip_to_gt(rest: &str) -> Lexed<'_> {
    match rest.find('>') {
        Some(i) => Lexed::Skip(i + 1),
        None => Lexed::Incomplete,
    }
}

fn tag_name(s: &str) -> &str {
    let end = s
        .find(|c: char| c.is_whitespace() || c == '/' || c == '>')
        .unwrap_or(s.len());
    &s[..end]
}

/// Index of the `>` closing a start tag. Quoted attribute values may contain `>`.
fn find_tag_end(tag: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    let mut after_eq = false;

    for (i, c) in tag.char_indices() {
        if let Some(q) = quote {
            if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '>' => return Some(i),
            '=' => after_eq = true,
            '"' | '\'' if after_eq => {
                quote = Some(c);
                after_eq = false;
            }
            c if c.is_whitespace() => {}
            _ => after_eq = false,
        }
    }

    None
}

fn is_raw_text_element(name: &str) -> bool {
    name.eq_ignore_ascii_case("script") || name.eq_ignore_ascii_case("style")
}

/// Byte offset of `</name` (ASCII case-insensitive) in `body`.
fn find_close_tag(body: &str, name: &str) -> Option<usize> {
    let needle = format!("</{}", name.to_ascii_lowercase());
    body.to_ascii_lowercase().find(&needle)
}
