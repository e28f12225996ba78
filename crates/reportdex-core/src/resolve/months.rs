use std::sync::LazyLock;

use regex::Regex;

use crate::model::Month;

/// A month and the pattern recognizing its Russian name.
#[derive(Debug)]
pub struct MonthRule {
    pub month: Month,
    pub pattern: Regex,
}

/// Inflected forms and common abbreviations, matched case-insensitively.
fn month_pattern(month: Month) -> &'static str {
    match month {
        Month::January => r"янв(?:арь|аря|\.?)",
        Month::February => r"февр?(?:аль|аля|\.?)",
        Month::March => r"март(?:а)?",
        Month::April => r"апрел(?:ь|я|\.?)",
        Month::May => r"ма[йя]",
        Month::June => r"июн(?:ь|я)",
        Month::July => r"июл(?:ь|я)",
        Month::August => r"август(?:а)?",
        Month::September => r"сентябр(?:ь|я)",
        Month::October => r"октябр(?:ь|я)",
        Month::November => r"ноябр(?:ь|я)",
        Month::December => r"декабр(?:ь|я)",
    }
}

/// One rule per month, in ascending month order.
pub static MONTH_RULES: LazyLock<Vec<MonthRule>> = LazyLock::new(|| {
    Month::ALL
        .iter()
        .map(|&month| MonthRule {
            month,
            pattern: Regex::new(&format!("(?i){}", month_pattern(month)))
                .expect("built-in month pattern is valid"),
        })
        .collect()
});

/// Find the first month (in ascending month order) whose pattern occurs
/// anywhere in `text`, with the byte offset of that occurrence.
///
/// Table order decides between months whose patterns could both match,
/// not position in the text.
pub fn find_month(text: &str) -> Option<(Month, usize)> {
    MONTH_RULES
        .iter()
        .find_map(|rule| rule.pattern.find(text).map(|m| (rule.month, m.start())))
}
