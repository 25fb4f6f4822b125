//! Time formatting for epoch-millisecond timestamps.
//!
//! Patterns use strftime directives. Month, weekday and AM/PM names come from the
//! formatter's [`Locale`]; every other directive is rendered by `chrono` in UTC.

use super::locale::Locale;
use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::{Serialize, Serializer};
use std::fmt::Write;

/// Identifier of the adaptive date format.
pub const SMART_DATE: &str = "smart_date";
/// Pattern used for `smart_date` and for an empty format id.
pub const SMART_DATE_PATTERN: &str = "%m/%y";

#[derive(Debug, Clone, PartialEq)]
pub struct TimeFormatter {
    id: String,
    pattern: String,
    locale: &'static Locale,
}

impl TimeFormatter {
    pub fn new(id: Option<&str>, locale: &'static Locale) -> Self {
        let id = id.unwrap_or("").trim();
        let pattern = if id.is_empty() || id == SMART_DATE {
            SMART_DATE_PATTERN
        } else {
            id
        };
        Self {
            id: if id.is_empty() { SMART_DATE.to_string() } else { id.to_string() },
            pattern: pattern.to_string(),
            locale,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Format an epoch-millisecond timestamp.
    pub fn format_millis(&self, millis: f64) -> String {
        if !millis.is_finite() {
            return "Invalid Date".to_string();
        }
        match DateTime::<Utc>::from_timestamp_millis(millis.round() as i64) {
            Some(dt) => self.format(&dt),
            None => "Invalid Date".to_string(),
        }
    }

    pub fn format(&self, dt: &DateTime<Utc>) -> String {
        let mut out = String::with_capacity(self.pattern.len() + 8);
        let mut chars = self.pattern.chars().peekable();
        while let Some(c) = chars.next() {
            if c != '%' {
                out.push(c);
                continue;
            }
            let mut directive = String::from("%");
            if let Some(&m) = chars.peek()
                && matches!(m, '-' | '_' | '0')
            {
                directive.push(m);
                chars.next();
            }
            let Some(spec) = chars.next() else {
                out.push_str(&directive);
                break;
            };
            let month = dt.month0() as usize;
            let weekday = dt.weekday().num_days_from_sunday() as usize;
            match spec {
                'B' => out.push_str(self.locale.months[month]),
                'b' | 'h' => out.push_str(self.locale.short_months[month]),
                'A' => out.push_str(self.locale.days[weekday]),
                'a' => out.push_str(self.locale.short_days[weekday]),
                'p' => out.push_str(self.locale.periods[usize::from(dt.hour() >= 12)]),
                other => {
                    directive.push(other);
                    if write!(out, "{}", dt.format(&directive)).is_err() {
                        out.push_str(&directive);
                    }
                }
            }
        }
        out
    }
}

impl Serialize for TimeFormatter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.id)
    }
}
