//! Date expansion - turns a calendar date into the digit strings a person
//! might pick as an MPIN.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("Invalid date (expected YYYY-MM-DD): {0}")]
    Parse(#[from] chrono::ParseError),
    #[error("Invalid date (expected a four-digit year followed by '-')")]
    YearFormat,
    #[error("Year out of range: {0}")]
    YearOutOfRange(i32),
}

/// Parses a `YYYY-MM-DD` demographic date.
///
/// The year must be exactly four ASCII digits; chrono's `%Y` alone would
/// also take a sign, leading whitespace or any width. Month and day may be
/// one or two digits.
pub fn parse_demographic_date(date_str: &str) -> Result<NaiveDate, DateError> {
    let bytes = date_str.as_bytes();
    if bytes.len() < 5 || !bytes[..4].iter().all(u8::is_ascii_digit) || bytes[4] != b'-' {
        return Err(DateError::YearFormat);
    }

    let date = NaiveDate::parse_from_str(date_str, DATE_FORMAT)?;
    if !(1..=9999).contains(&date.year()) {
        return Err(DateError::YearOutOfRange(date.year()));
    }
    Ok(date)
}

/// Digit layout derived from a date. `YY` is the last two characters of the
/// four-digit year, so 2003 gives `03`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateLayout {
    /// MMDD
    MonthDay,
    /// DDMM
    DayMonth,
    /// YYMM
    YearMonth,
    /// MMYY
    MonthYear,
    /// DDYY
    DayYear,
    /// YYDD
    YearDay,
    /// YYYY
    FullYear,
    /// YYYY with the short year repeated
    YearYear,
    /// MMDDYY
    MonthDayYear,
    /// DDMMYY
    DayMonthYear,
    /// YYYYMM
    FullYearMonth,
    /// YYYYDD
    FullYearDay,
    /// YYMMDD
    YearMonthDay,
    /// MMYYDD
    MonthYearDay,
    /// DDYYMM
    DayYearMonth,
}

impl DateLayout {
    /// All layouts in the order patterns are produced.
    pub const ALL: [DateLayout; 15] = [
        DateLayout::MonthDay,
        DateLayout::DayMonth,
        DateLayout::YearMonth,
        DateLayout::MonthYear,
        DateLayout::DayYear,
        DateLayout::YearDay,
        DateLayout::FullYear,
        DateLayout::YearYear,
        DateLayout::MonthDayYear,
        DateLayout::DayMonthYear,
        DateLayout::FullYearMonth,
        DateLayout::FullYearDay,
        DateLayout::YearMonthDay,
        DateLayout::MonthYearDay,
        DateLayout::DayYearMonth,
    ];

    /// Number of digits this layout renders to.
    pub fn digits(&self) -> usize {
        match self {
            DateLayout::MonthDay
            | DateLayout::DayMonth
            | DateLayout::YearMonth
            | DateLayout::MonthYear
            | DateLayout::DayYear
            | DateLayout::YearDay
            | DateLayout::FullYear
            | DateLayout::YearYear => 4,
            _ => 6,
        }
    }

    pub fn render(&self, date: &NaiveDate) -> String {
        let year = format!("{:04}", date.year());
        let yy = &year[year.len() - 2..];
        let mm = format!("{:02}", date.month());
        let dd = format!("{:02}", date.day());

        match self {
            DateLayout::MonthDay => format!("{mm}{dd}"),
            DateLayout::DayMonth => format!("{dd}{mm}"),
            DateLayout::YearMonth => format!("{yy}{mm}"),
            DateLayout::MonthYear => format!("{mm}{yy}"),
            DateLayout::DayYear => format!("{dd}{yy}"),
            DateLayout::YearDay => format!("{yy}{dd}"),
            DateLayout::FullYear => year.clone(),
            DateLayout::YearYear => format!("{yy}{yy}"),
            DateLayout::MonthDayYear => format!("{mm}{dd}{yy}"),
            DateLayout::DayMonthYear => format!("{dd}{mm}{yy}"),
            DateLayout::FullYearMonth => format!("{year}{mm}"),
            DateLayout::FullYearDay => format!("{year}{dd}"),
            DateLayout::YearMonthDay => format!("{yy}{mm}{dd}"),
            DateLayout::MonthYearDay => format!("{mm}{yy}{dd}"),
            DateLayout::DayYearMonth => format!("{dd}{yy}{mm}"),
        }
    }
}

/// Renders `date_str` through each of `layouts`.
///
/// Absent, empty or unparseable input yields no patterns.
pub fn expand_date(date_str: Option<&str>, layouts: &[DateLayout]) -> Vec<String> {
    let Some(date_str) = date_str.filter(|s| !s.is_empty()) else {
        return Vec::new();
    };

    match parse_demographic_date(date_str) {
        Ok(date) => layouts.iter().map(|layout| layout.render(&date)).collect(),
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::debug!("Skipping unparseable demographic date: {}", _e);
            Vec::new()
        }
    }
}

/// Extracts every 4- and 6-digit pattern derivable from a `YYYY-MM-DD` date.
///
/// Produces all fifteen [`DateLayout`]s; `Profile::Household.date_layouts()`
/// is the thirteen-layout set without DDYY and YYDD.
pub fn extract_date_patterns(date_str: Option<&str>) -> Vec<String> {
    expand_date(date_str, &DateLayout::ALL)
}
