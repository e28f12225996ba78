use std::sync::LazyLock;

use regex::Regex;

use crate::markup::ScannedText;
use crate::model::{Month, Period, PeriodSource};
use crate::resolve::months::find_month;

/// Characters searched on each side of a month word for its year.
pub const YEAR_WINDOW: usize = 40;

static REPORT_MONTH_META: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<meta\s+name=["']report-month["']\s+content=["']([0-9]{4})-([0-9]{2})["']"#,
    )
    .expect("report-month meta pattern is valid")
});

static YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"20[0-9]{2}").expect("year pattern is valid"));

/// Resolve the reporting period of a document.
///
/// The `report-month` meta tag in the raw markup is authoritative. Without
/// it, the first month word (in month order) of the visible text is used,
/// and the year is the first `20xx` within [`YEAR_WINDOW`] characters of it.
pub fn resolve_period(raw: &str, scanned: &ScannedText) -> Period {
    if let Some(period) = period_from_meta(raw) {
        return period;
    }
    period_from_text(&scanned.blob())
}

/// Read `<meta name="report-month" content="YYYY-MM">`.
///
/// A month number outside 1..=12 leaves the month unset but keeps the year.
pub fn period_from_meta(raw: &str) -> Option<Period> {
    let caps = REPORT_MONTH_META.captures(raw)?;
    let year = caps.get(1)?.as_str().parse().ok()?;
    let month = caps
        .get(2)?
        .as_str()
        .parse()
        .ok()
        .and_then(Month::from_number);

    Some(Period {
        month,
        year: Some(year),
        source: PeriodSource::MetaTag,
    })
}

/// Heuristic month/year search over joined visible text.
pub fn period_from_text(blob: &str) -> Period {
    let Some((month, offset)) = find_month(blob) else {
        return Period::unknown();
    };

    let around = char_window(blob, offset, YEAR_WINDOW);
    let year = YEAR.find(around).and_then(|m| m.as_str().parse().ok());

    Period {
        month: Some(month),
        year,
        source: PeriodSource::VisibleText,
    }
}

/// `radius` characters before byte offset `at`, plus `radius` characters
/// starting at it, clamped to the text.
fn char_window(text: &str, at: usize, radius: usize) -> &str {
    let start = if radius == 0 {
        at
    } else {
        text[..at]
            .char_indices()
            .rev()
            .nth(radius - 1)
            .map(|(i, _)| i)
            .unwrap_or(0)
    };
    let end = text[at..]
        .char_indices()
        .nth(radius)
        .map(|(i, _)| at + i)
        .unwrap_or(text.len());
    &text[start..end]
}
