//! Number and time formatter registry.
//!
//! Formatters are looked up by their string id (`".3s"`, `"+.1%"`, `"smart_date"`, …) and are
//! always bound to an explicit [`Locale`]. A [`Formatters`] value is passed into every transform;
//! nothing here touches process-wide state.

pub mod locale;
pub mod number;
pub mod time;

pub use locale::{EN_US, Locale, RU, map_locale};
pub use number::{NumberFormatter, PERCENT_CHANGE_1_POINT, SMART_NUMBER};
pub use time::{SMART_DATE, TimeFormatter};

/// Factory for locale-bound formatters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Formatters {
    locale: &'static Locale,
}

impl Default for Formatters {
    fn default() -> Self {
        Self::new(&EN_US)
    }
}

impl Formatters {
    pub fn new(locale: &'static Locale) -> Self {
        Self { locale }
    }

    /// Formatters for a locale tag such as `"ru"`; unknown tags fall back to English.
    pub fn for_tag(tag: &str) -> Self {
        Self::new(map_locale(tag))
    }

    pub fn locale(&self) -> &'static Locale {
        self.locale
    }

    /// Number formatter for `id`. A missing/blank id or an unparseable pattern yields
    /// the `SMART_NUMBER` formatter.
    pub fn number(&self, id: Option<&str>) -> NumberFormatter {
        match id.map(str::trim).filter(|s| !s.is_empty()) {
            None => NumberFormatter::smart(self.locale),
            Some(id) => NumberFormatter::parse(id, self.locale).unwrap_or_else(|e| {
                log::warn!("{}; using {}", e, SMART_NUMBER);
                NumberFormatter::smart(self.locale)
            }),
        }
    }

    /// Time formatter for `id`; `smart_date` or a missing id means `%m/%y`.
    pub fn time(&self, id: Option<&str>) -> TimeFormatter {
        TimeFormatter::new(id, self.locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_patterns_fall_back_to_smart_number() {
        let f = Formatters::default();
        assert_eq!(f.number(Some("bogus!")).id(), SMART_NUMBER);
        assert_eq!(f.number(Some("  ")).id(), SMART_NUMBER);
        assert_eq!(f.number(None).format(1500.0), "1.5k");
        assert_eq!(f.number(Some(".1f")).format(2.26), "2.3");
    }

    #[test]
    fn locale_is_threaded_through() {
        let ru = Formatters::for_tag("ru");
        assert_eq!(ru.number(Some(",d")).format(12345.0), "12 345");
        assert_eq!(Formatters::default().number(Some(",d")).format(12345.0), "12,345");
    }
}
