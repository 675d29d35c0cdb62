//!
//! Conversion between the picker value and its text.
//!
//! Uses chrono strftime patterns. Each [PickerType] has a default
//! pattern, which can be replaced. Month and weekday names follow
//! the locale.
//!

use crate::date_util::start_of_year;
use crate::picker_type::PickerType;
use chrono::format::{DelayedFormat, Parsed, StrftimeItems};
use chrono::{Locale, NaiveDate, NaiveDateTime, NaiveTime};
use log::warn;
use std::fmt;
use std::fmt::Write;

/// Fallback patterns for values coming from a native input.
const ISO_DATE: &[&str] = &["%Y-%m-%d"];
const ISO_TIME: &[&str] = &["%H:%M", "%H:%M:%S"];
const ISO_DATE_TIME: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Pattern and locale for one picker.
#[derive(Debug, Clone)]
pub struct PickerFormat {
    kind: PickerType,
    pattern: String,
    locale: Locale,
}

impl Default for PickerFormat {
    fn default() -> Self {
        Self::new(PickerType::default())
    }
}

impl PickerFormat {
    /// Format with the default pattern of the type.
    pub fn new(kind: PickerType) -> Self {
        Self {
            kind,
            pattern: kind.default_pattern().to_string(),
            locale: Locale::POSIX,
        }
    }

    /// Format with an explicit pattern.
    ///
    /// The pattern is not checked here. If it can't be used
    /// [format](Self::format) falls back to the plain display
    /// of the value.
    pub fn with_pattern(kind: PickerType, pattern: impl Into<String>) -> Self {
        Self {
            kind,
            pattern: pattern.into(),
            locale: Locale::POSIX,
        }
    }

    /// Locale for month and weekday names.
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    #[inline]
    pub fn kind(&self) -> PickerType {
        self.kind
    }

    #[inline]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    #[inline]
    pub fn get_locale(&self) -> Locale {
        self.locale
    }

    /// Replace the pattern. None resets to the default of the type.
    pub fn set_pattern(&mut self, pattern: Option<&str>) {
        self.pattern = pattern.unwrap_or(self.kind.default_pattern()).to_string();
    }

    /// Check if the pattern can be used for formatting.
    pub fn validate(&self) -> Result<(), fmt::Error> {
        StrftimeItems::new_with_locale(self.pattern.as_str(), self.locale)
            .parse()
            .map(|_| ())
            .map_err(|_| fmt::Error)
    }

    /// Format the value. An empty string for None.
    ///
    /// Never fails. If the pattern can't be used, this writes a
    /// warning to the log and uses the default display of the value.
    pub fn format(&self, value: Option<NaiveDateTime>) -> String {
        let Some(value) = value else {
            return String::new();
        };
        match self.try_format(value) {
            Ok(v) => v,
            Err(_) => {
                warn!("invalid date pattern {:?} for {}", self.pattern, self.kind);
                value.to_string()
            }
        }
    }

    /// Format the value with the pattern.
    pub fn try_format(&self, value: NaiveDateTime) -> Result<String, fmt::Error> {
        format_with(value, self.pattern.as_str(), self.locale)
    }

    /// Parse the text.
    ///
    /// Tries the pattern first and then the ISO forms a native input
    /// produces. Empty or malformed text gives None.
    ///
    /// * Time: today's date with the parsed time.
    /// * Year: Jan 1st, midnight of the year. A plain number
    ///   is accepted too.
    /// * Date: the date at midnight.
    /// * DateTime: the complete date and time.
    pub fn parse(&self, text: &str, today: NaiveDate) -> Option<NaiveDateTime> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        match self.kind {
            PickerType::Time => parse_time(text, self.pattern.as_str()).map(|v| today.and_time(v)),
            PickerType::Year => {
                parse_year(text, self.pattern.as_str()).and_then(start_of_year)
            }
            PickerType::Date => {
                parse_date(text, self.pattern.as_str()).map(|v| v.and_time(NaiveTime::MIN))
            }
            PickerType::DateTime => parse_date_time(text, self.pattern.as_str()),
        }
    }

    /// Localized month name. Month is 0-based.
    pub fn month_name(&self, month0: u32) -> String {
        if month0 >= 12 {
            return String::new();
        }
        let Some(date) = NaiveDate::from_ymd_opt(2000, month0 + 1, 1) else {
            return String::new();
        };
        format_with(date.and_time(NaiveTime::MIN), "%B", self.locale).unwrap_or_default()
    }

    /// Localized short weekday names, starting with Sunday.
    pub fn weekday_names(&self) -> [String; 7] {
        // 2023-01-01 is a Sunday.
        std::array::from_fn(|i| {
            NaiveDate::from_ymd_opt(2023, 1, 1 + i as u32)
                .and_then(|v| format_with(v.and_time(NaiveTime::MIN), "%a", self.locale).ok())
                .unwrap_or_default()
        })
    }
}

fn format_with(value: NaiveDateTime, pattern: &str, locale: Locale) -> Result<String, fmt::Error> {
    let items = StrftimeItems::new_with_locale(pattern, locale)
        .parse()
        .map_err(|_| fmt::Error)?;
    let fmt = DelayedFormat::new_with_locale(
        Some(value.date()),
        Some(value.time()),
        items.iter(),
        locale,
    );
    let mut buf = String::new();
    write!(buf, "{}", fmt)?;
    Ok(buf)
}

fn parse_time(text: &str, pattern: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(text, pattern).ok().or_else(|| {
        ISO_TIME
            .iter()
            .find_map(|p| NaiveTime::parse_from_str(text, p).ok())
    })
}

fn parse_year(text: &str, pattern: &str) -> Option<i32> {
    let mut parsed = Parsed::new();
    chrono::format::parse(&mut parsed, text, StrftimeItems::new(pattern))
        .ok()
        .and_then(|_| parsed.year())
        .or_else(|| text.parse::<i32>().ok())
}

fn parse_date(text: &str, pattern: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, pattern)
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(text, pattern)
                .ok()
                .map(|v| v.date())
        })
        .or_else(|| {
            ISO_DATE
                .iter()
                .find_map(|p| NaiveDate::parse_from_str(text, p).ok())
        })
}

fn parse_date_time(text: &str, pattern: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, pattern)
        .ok()
        .or_else(|| {
            ISO_DATE_TIME
                .iter()
                .find_map(|p| NaiveDateTime::parse_from_str(text, p).ok())
        })
        .or_else(|| parse_date(text, pattern).map(|v| v.and_time(NaiveTime::MIN)))
}

/// Format the value for the given type.
/// Uses the default pattern of the type if none is given.
pub fn format_value(value: Option<NaiveDateTime>, kind: PickerType, pattern: Option<&str>) -> String {
    match pattern {
        Some(pattern) => PickerFormat::with_pattern(kind, pattern).format(value),
        None => PickerFormat::new(kind).format(value),
    }
}

/// Parse the text for the given type.
/// Uses the default pattern of the type if none is given.
pub fn parse_text(
    text: &str,
    kind: PickerType,
    pattern: Option<&str>,
    today: NaiveDate,
) -> Option<NaiveDateTime> {
    match pattern {
        Some(pattern) => PickerFormat::with_pattern(kind, pattern).parse(text, today),
        None => PickerFormat::new(kind).parse(text, today),
    }
}
