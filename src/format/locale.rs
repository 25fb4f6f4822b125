//! Locale definitions for number and time formatting.

/// Separators, currency affixes and calendar names used by the formatters.
#[derive(Debug, PartialEq)]
pub struct Locale {
    pub tag: &'static str,
    pub decimal: char,
    pub thousands: &'static str,
    pub grouping: usize,
    pub currency: (&'static str, &'static str),
    pub periods: [&'static str; 2],
    pub days: [&'static str; 7],
    pub short_days: [&'static str; 7],
    pub months: [&'static str; 12],
    pub short_months: [&'static str; 12],
}

pub static EN_US: Locale = Locale {
    tag: "en_US",
    decimal: '.',
    thousands: ",",
    grouping: 3,
    currency: ("$", ""),
    periods: ["AM", "PM"],
    days: [
        "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
    ],
    short_days: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    months: [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ],
    short_months: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
};

/// Russian dashboard locale. Full month names are replaced by the quarter the month falls in.
pub static RU: Locale = Locale {
    tag: "ru_RU",
    decimal: '.',
    thousands: " ",
    grouping: 3,
    currency: ("₽", ""),
    periods: ["AM", "PM"],
    days: [
        "воскресенье", "понедельник", "вторник", "среда", "четверг", "пятница", "суббота",
    ],
    short_days: ["вс", "пн", "вт", "ср", "чт", "пт", "сб"],
    months: [
        "1Q", "1Q", "1Q", "2Q", "2Q", "2Q", "3Q", "3Q", "3Q", "4Q", "4Q", "4Q",
    ],
    short_months: [
        "янв", "фев", "мар", "апр", "май", "июн", "июл", "авг", "сен", "окт", "ноя", "дек",
    ],
};

/// Map a user-provided locale tag to a built-in locale.
///
/// Supported tags (case-insensitive): `en`, `us`, `en_US`, `ru`, `ru_RU`, `russian`.
/// Defaults to English.
pub fn map_locale(tag: &str) -> &'static Locale {
    match tag.to_lowercase().replace('-', "_").as_str() {
        "ru" | "ru_ru" | "russian" => &RU,
        _ => &EN_US,
    }
}
