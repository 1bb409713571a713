//! Date canonicalization
//!
//! Form dates arrive as date-picker values, epoch milliseconds or free text in
//! day-first or year-first order. Everything is reduced to a calendar-valid
//! [`CanonicalDate`] or `None`; nothing here fails loudly.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use inspection_types::{CanonicalDate, DateInput};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

lazy_static! {
    /// `dd-mm-yyyy` or `dd/mm/yyyy`
    static ref DAY_FIRST_PATTERN: Regex =
        Regex::new(r"^(\d{1,2})[-/](\d{1,2})[-/](\d{4})$").unwrap();

    /// `yyyy-mm-dd` or `yyyy/mm/dd`, optionally followed by a time part
    static ref YEAR_FIRST_PATTERN: Regex =
        Regex::new(r"^(\d{4})[-/](\d{1,2})[-/](\d{1,2})(?:[T\s]|$)").unwrap();
}

/// Date-time layouts tried by the fallback parser
const FALLBACK_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

/// Date-only layouts tried by the fallback parser
const FALLBACK_DATE_FORMATS: &[&str] = &[
    "%d.%m.%Y",
    "%Y.%m.%d",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%Y%m%d",
];

/// Canonicalize any form date input. `None` in, `None` out.
pub fn canonicalize(input: Option<&DateInput>) -> Option<CanonicalDate> {
    let date = match input? {
        DateInput::Text(text) => canonicalize_str(text),
        DateInput::Timestamp(millis) => from_timestamp_millis(*millis),
        DateInput::Date(date) => Some(CanonicalDate::new(*date)),
        DateInput::DateTime(dt) => Some(CanonicalDate::new(dt.date_naive())),
    };
    date.filter(has_four_digit_year)
}

/// Canonicalize a textual date.
///
/// Once the day-first or year-first pattern matches, the outcome is decided by
/// that pattern alone: an impossible day such as `31-02-2024` yields `None`
/// rather than being retried with another layout.
pub fn canonicalize_str(input: &str) -> Option<CanonicalDate> {
    let text = input.trim();
    if text.is_empty() {
        return None;
    }

    if let Some(caps) = DAY_FIRST_PATTERN.captures(text) {
        return from_parts(&caps[3], &caps[2], &caps[1]);
    }

    if let Some(caps) = YEAR_FIRST_PATTERN.captures(text) {
        return from_parts(&caps[1], &caps[2], &caps[3]);
    }

    let parsed = parse_fallback(text).filter(has_four_digit_year);
    if parsed.is_none() {
        trace!("Unparseable date discarded: {:?}", text);
    }
    parsed
}

/// Zero-pad the parts into `yyyy-mm-dd` and keep it only if it is a real day
fn from_parts(year: &str, month: &str, day: &str) -> Option<CanonicalDate> {
    let iso = format!("{}-{:0>2}-{:0>2}", year, month, day);
    NaiveDate::parse_from_str(&iso, "%Y-%m-%d")
        .ok()
        .map(CanonicalDate::new)
}

// yyyy-mm-dd has no room for years past 9999 or before year 0
fn has_four_digit_year(date: &CanonicalDate) -> bool {
    (0..=9999).contains(&date.date().year())
}

fn from_timestamp_millis(millis: f64) -> Option<CanonicalDate> {
    if !millis.is_finite() {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(millis.trunc() as i64)
        .map(|dt| CanonicalDate::new(dt.date_naive()))
}

fn parse_fallback(text: &str) -> Option<CanonicalDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(CanonicalDate::new(dt.date_naive()));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(CanonicalDate::new(dt.date_naive()));
    }

    FALLBACK_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .map(|dt| dt.date())
        .or_else(|| {
            FALLBACK_DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        })
        .map(CanonicalDate::new)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::Datelike;
    use proptest::prelude::*;

    fn calendar_date() -> impl Strategy<Value = NaiveDate> {
        (1900i32..2100, 1u32..=366)
            .prop_filter_map("valid ordinal", |(year, ordinal)| {
                NaiveDate::from_yo_opt(year, ordinal)
            })
    }

    proptest! {
        /// Property: valid day-first dates map to the same day in yyyy-mm-dd
        #[test]
        fn day_first_round_trips(date in calendar_date(), slash in any::<bool>()) {
            let sep = if slash { '/' } else { '-' };
            let text = format!("{:02}{sep}{:02}{sep}{:04}", date.day(), date.month(), date.year());
            let expected = format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day());
            prop_assert_eq!(canonicalize_str(&text).map(|d| d.to_string()), Some(expected));
        }

        /// Property: canonical output is a fixed point
        #[test]
        fn canonical_output_is_stable(date in calendar_date()) {
            let once = CanonicalDate::new(date).to_string();
            let twice = canonicalize_str(&once).map(|d| d.to_string());
            prop_assert_eq!(twice, Some(once));
        }

        /// Property: arbitrary text never panics and any result is calendar valid
        #[test]
        fn arbitrary_text_is_safe(text in "\\PC{0,20}") {
            if let Some(date) = canonicalize_str(&text) {
                let rendered = date.to_string();
                prop_assert!(NaiveDate::parse_from_str(&rendered, "%Y-%m-%d").is_ok());
            }
        }
    }
}
