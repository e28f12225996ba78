use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar month of a report period.
///
/// Discriminants are the month numbers, so `Month::July as u32 == 7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Month {
    January = 1,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All months in ascending order. Month-word search relies on this order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    pub fn from_number(n: u32) -> Option<Month> {
        let idx = usize::try_from(n).ok()?.checked_sub(1)?;
        Month::ALL.get(idx).copied()
    }

    pub fn number(self) -> u32 {
        self as u32
    }

    /// Canonical Russian label used in the manifest, whatever form matched.
    pub fn label(self) -> &'static str {
        match self {
            Month::January => "Январь",
            Month::February => "Февраль",
            Month::March => "Март",
            Month::April => "Апрель",
            Month::May => "Май",
            Month::June => "Июнь",
            Month::July => "Июль",
            Month::August => "Август",
            Month::September => "Сентябрь",
            Month::October => "Октябрь",
            Month::November => "Ноябрь",
            Month::December => "Декабрь",
        }
    }
}

/// Which rule of the name cascade produced a display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameSource {
    /// Trailing "…: Surname Given" segment of the `<title>`.
    TitleSuffix,
    Title,
    Heading,
    Filename,
}

impl fmt::Display for NameSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameSource::TitleSuffix => write!(f, "title suffix"),
            NameSource::Title => write!(f, "title"),
            NameSource::Heading => write!(f, "h1 heading"),
            NameSource::Filename => write!(f, "filename"),
        }
    }
}

/// Which signal produced a report period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodSource {
    /// `<meta name="report-month" content="YYYY-MM">`
    MetaTag,
    VisibleText,
    None,
}

impl fmt::Display for PeriodSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodSource::MetaTag => write!(f, "report-month meta tag"),
            PeriodSource::VisibleText => write!(f, "visible text"),
            PeriodSource::None => write!(f, "not found"),
        }
    }
}

/// Reporting period recovered from a document.
///
/// Month number and month label travel together through `month`; the year
/// is resolved independently and may be present without a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub month: Option<Month>,
    pub year: Option<i32>,
    pub source: PeriodSource,
}

impl Period {
    pub fn unknown() -> Self {
        Period {
            month: None,
            year: None,
            source: PeriodSource::None,
        }
    }
}

/// One entry of the JSON manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRecord {
    pub name: String,
    pub url: String,
    /// 1..=12, or null.
    pub month: Option<u32>,
    pub month_name: Option<String>,
    pub year: Option<i32>,
}

impl IndexRecord {
    pub fn new(name: String, url: String, period: &Period) -> Self {
        IndexRecord {
            name,
            url,
            month: period.month.map(Month::number),
            month_name: period.month.map(|m| m.label().to_string()),
            year: period.year,
        }
    }
}
