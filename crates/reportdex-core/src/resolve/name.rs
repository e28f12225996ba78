use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::markup::ScannedText;
use crate::model::NameSource;

/// "Отчёт за июль: Иванов Пётр" -> "Иванов Пётр".
///
/// A `:`, `-` or en-dash, then a segment starting with an uppercase
/// Cyrillic or Latin letter that runs to the end of the title.
static TRAILING_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[:\-–]\s*([А-ЯA-ZЁ][^|<>()]{2,})$").expect("trailing name pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedName {
    pub name: String,
    pub source: NameSource,
}

/// Pick a display name: title suffix, then full title, then `<h1>`, then
/// the humanized filename.
pub fn resolve_name(scanned: &ScannedText, filename: &str) -> ResolvedName {
    let title = scanned.title_text();
    if !title.is_empty() {
        if let Some(suffix) = trailing_name(&title) {
            return ResolvedName {
                name: suffix.to_string(),
                source: NameSource::TitleSuffix,
            };
        }
        return ResolvedName {
            name: title,
            source: NameSource::Title,
        };
    }

    let heading = scanned.heading_text();
    if !heading.is_empty() {
        return ResolvedName {
            name: heading,
            source: NameSource::Heading,
        };
    }

    ResolvedName {
        name: humanize_filename(filename),
        source: NameSource::Filename,
    }
}

fn trailing_name(title: &str) -> Option<&str> {
    TRAILING_NAME
        .captures(title)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

/// "report_2025-07.final.html" -> "Report 2025 07 Final".
pub fn humanize_filename(filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();

    stem.split(['_', '-', '.'])
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first character, lowercase the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

/// Collapse whitespace runs to single spaces and trim the ends.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
