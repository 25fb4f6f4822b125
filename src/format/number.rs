//! Number formatting with a d3-format style mini-language.
//!
//! The general form of a pattern is:
//!
//! ```text
//! [[fill]align][sign][$][0][width][,][.precision][~][type]
//! ```
//!
//! Supported types: `f` fixed point, `d` rounded integer, `%` percentage, `p` percentage
//! rounded to significant digits, `e` exponent notation, `s` SI prefix, `r` and `g`
//! significant digits, and none (shortest representation, 12 significant digits).
//! `~` trims insignificant trailing zeros. Group and decimal separators come from the
//! [`Locale`](super::locale::Locale) the formatter was built with.
//!
//! ```
//! use chart_props::format::{NumberFormatter, EN_US};
//!
//! let f = NumberFormatter::parse("+.1%", &EN_US).unwrap();
//! assert_eq!(f.format(1.0), "+100.0%");
//! let f = NumberFormatter::parse(",.2f", &EN_US).unwrap();
//! assert_eq!(f.format(1234.5), "1,234.50");
//! ```

use super::locale::Locale;
use crate::error::FormatError;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::cmp::max;
use std::sync::OnceLock;

/// Identifier of the adaptive default number format.
pub const SMART_NUMBER: &str = "SMART_NUMBER";
/// Signed percentage with one decimal, used for period-over-period change.
pub const PERCENT_CHANGE_1_POINT: &str = "+.1%";

const PREFIXES: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
    Center,
    /// Padding goes between the sign and the digits.
    AfterSign,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sign {
    Minus,
    Plus,
    Space,
    Parens,
}

#[derive(Debug, Clone, PartialEq)]
struct FormatSpec {
    fill: char,
    align: Align,
    sign: Sign,
    currency: bool,
    width: usize,
    comma: bool,
    precision: Option<usize>,
    trim: bool,
    ty: Option<char>,
}

fn pattern_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:(.)?([<>=^]))?([+\-( ])?([$#])?(0)?(\d+)?(,)?(\.\d+)?(~)?([a-z%])?$")
            .expect("number format regex")
    })
}

impl FormatSpec {
    fn parse(pattern: &str) -> Result<Self, FormatError> {
        let caps = pattern_regex()
            .captures(pattern)
            .ok_or_else(|| FormatError::InvalidPattern(pattern.to_string()))?;
        let invalid = || FormatError::InvalidPattern(pattern.to_string());

        let mut fill = caps
            .get(1)
            .and_then(|m| m.as_str().chars().next())
            .unwrap_or(' ');
        let mut align = match caps.get(2).map(|m| m.as_str()) {
            Some("<") => Align::Left,
            Some("^") => Align::Center,
            Some("=") => Align::AfterSign,
            _ => Align::Right,
        };
        let sign = match caps.get(3).map(|m| m.as_str()) {
            Some("+") => Sign::Plus,
            Some(" ") => Sign::Space,
            Some("(") => Sign::Parens,
            _ => Sign::Minus,
        };
        let currency = caps.get(4).map(|m| m.as_str()) == Some("$");
        if caps.get(5).is_some() || (fill == '0' && align == Align::AfterSign) {
            fill = '0';
            align = Align::AfterSign;
        }
        let width = match caps.get(6) {
            Some(m) => m.as_str().parse().map_err(|_| invalid())?,
            None => 0,
        };
        let precision = match caps.get(8) {
            Some(m) => Some(m.as_str()[1..].parse().map_err(|_| invalid())?),
            None => None,
        };
        let ty = caps.get(10).and_then(|m| m.as_str().chars().next());
        if let Some(t) = ty
            && !matches!(t, 'f' | 'd' | '%' | 'p' | 'e' | 's' | 'r' | 'g')
        {
            return Err(FormatError::UnsupportedType {
                pattern: pattern.to_string(),
                ty: t,
            });
        }

        Ok(Self {
            fill,
            align,
            sign,
            currency,
            width,
            comma: caps.get(7).is_some(),
            precision,
            trim: caps.get(9).is_some() || ty.is_none(),
            ty,
        })
    }

    fn precision_or_default(&self) -> usize {
        match (self.precision, self.ty) {
            (_, Some('d')) => 0,
            (Some(p), _) => p,
            (None, None) => 12,
            (None, Some(_)) => 6,
        }
    }

    fn apply(&self, value: f64, locale: &Locale) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        let mut negative = value < 0.0 || (value == 0.0 && value.is_sign_negative());
        let abs = value.abs();
        let p = self.precision_or_default();

        let (mut body, si, unit) = if abs.is_infinite() {
            ("Infinity".to_string(), "", "")
        } else {
            match self.ty {
                Some('f') => (format!("{:.*}", p, abs), "", ""),
                Some('d') => (format!("{:.0}", abs.round()), "", ""),
                Some('%') => (format!("{:.*}", p, abs * 100.0), "", "%"),
                Some('p') => (significant(abs * 100.0, max(1, p)), "", "%"),
                Some('e') => (exponent(abs, p), "", ""),
                Some('g') => (general(abs, max(1, p)), "", ""),
                Some('s') => {
                    let (digits, prefix) = si_prefix(abs, max(1, p));
                    (digits, prefix, "")
                }
                _ => (significant(abs, max(1, p)), "", ""),
            }
        };

        if self.trim {
            body = trim_insignificant(&body);
        }

        // negative values that round to zero lose their sign
        let rounds_to_zero = body.chars().any(|c| c.is_ascii_digit())
            && body.chars().all(|c| !c.is_ascii_digit() || c == '0');
        if negative && rounds_to_zero && self.sign != Sign::Plus {
            negative = false;
        }

        if self.comma {
            body = group(&body, locale);
        }
        if locale.decimal != '.' {
            body = body.replace('.', &locale.decimal.to_string());
        }

        let sign_prefix = match (negative, self.sign) {
            (true, Sign::Parens) => "(",
            (true, _) => "-",
            (false, Sign::Plus) => "+",
            (false, Sign::Space) => " ",
            (false, _) => "",
        };
        let sign_suffix = if negative && self.sign == Sign::Parens { ")" } else { "" };
        let (cur_prefix, cur_suffix) = if self.currency { locale.currency } else { ("", "") };

        let head = format!("{}{}", sign_prefix, cur_prefix);
        let tail = format!("{}{}{}{}{}", body, si, unit, cur_suffix, sign_suffix);
        self.pad(head, tail)
    }

    fn pad(&self, head: String, tail: String) -> String {
        let len = head.chars().count() + tail.chars().count();
        if self.width <= len {
            return head + &tail;
        }
        let n = self.width - len;
        let fill = |k: usize| std::iter::repeat_n(self.fill, k).collect::<String>();
        match self.align {
            Align::Left => format!("{}{}{}", head, tail, fill(n)),
            Align::Center => format!("{}{}{}{}", fill(n / 2), head, tail, fill(n - n / 2)),
            Align::AfterSign => format!("{}{}{}", head, fill(n), tail),
            Align::Right => format!("{}{}{}", fill(n), head, tail),
        }
    }
}

/// Split `{:e}` output into mantissa text and exponent.
fn split_exp(s: &str) -> (&str, i32) {
    match s.split_once('e') {
        Some((m, e)) => (m, e.parse().unwrap_or(0)),
        None => (s, 0),
    }
}

/// `value` rounded to `p` significant digits, written in fixed notation.
fn significant(value: f64, p: usize) -> String {
    if value == 0.0 {
        return format!("{:.*}", p - 1, 0.0);
    }
    let e = format!("{:.*e}", p - 1, value);
    let (mantissa, exp) = split_exp(&e);
    let decimals = max(0, p as i32 - 1 - exp) as usize;
    let rounded = mantissa.parse::<f64>().unwrap_or(value) * 10f64.powi(exp);
    format!("{:.*}", decimals, rounded)
}

fn exponent(value: f64, p: usize) -> String {
    let e = format!("{:.*e}", p, value);
    let (mantissa, exp) = split_exp(&e);
    if exp < 0 {
        format!("{}e{}", mantissa, exp)
    } else {
        format!("{}e+{}", mantissa, exp)
    }
}

fn general(value: f64, p: usize) -> String {
    if value == 0.0 {
        return significant(value, p);
    }
    let (_, exp) = split_exp(&format!("{:.*e}", p - 1, value));
    if exp < -6 || exp >= p as i32 {
        exponent(value, p - 1)
    } else {
        significant(value, p)
    }
}

/// Digits scaled to the SI prefix of `value`, rounded to `p` significant digits.
fn si_prefix(value: f64, p: usize) -> (String, &'static str) {
    if value == 0.0 {
        return (format!("{:.*}", p - 1, 0.0), "");
    }
    let e = format!("{:.*e}", p - 1, value);
    let (mantissa, exp) = split_exp(&e);
    let k = (exp as f64 / 3.0).floor().clamp(-8.0, 8.0) as i32;
    let shift = exp - 3 * k;
    let decimals = max(0, p as i32 - 1 - shift) as usize;
    let scaled = mantissa.parse::<f64>().unwrap_or(0.0) * 10f64.powi(shift);
    (format!("{:.*}", decimals, scaled), PREFIXES[(k + 8) as usize])
}

/// Drop trailing zeros after the decimal point (and the point itself when nothing remains).
fn trim_insignificant(s: &str) -> String {
    let (num, exp) = match s.find('e') {
        Some(i) => (&s[..i], &s[i..]),
        None => (s, ""),
    };
    if !num.contains('.') {
        return s.to_string();
    }
    let trimmed = num.trim_end_matches('0').trim_end_matches('.');
    format!("{}{}", trimmed, exp)
}

/// Insert the locale's thousands separator into the integer part.
fn group(s: &str, locale: &Locale) -> String {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let (int, rest) = s.split_at(end);
    if int.len() <= locale.grouping || locale.grouping == 0 {
        return s.to_string();
    }
    let digits: Vec<char> = int.chars().collect();
    let mut chunks: Vec<String> = digits
        .rchunks(locale.grouping)
        .map(|c| c.iter().collect())
        .collect();
    chunks.reverse();
    format!("{}{}", chunks.join(locale.thousands), rest)
}

#[derive(Debug, Clone, PartialEq)]
enum Pattern {
    Smart,
    Spec(FormatSpec),
}

/// A number formatter bound to a pattern and a locale.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberFormatter {
    id: String,
    pattern: Pattern,
    locale: &'static Locale,
}

impl NumberFormatter {
    /// Build a formatter from a format id. `SMART_NUMBER` selects the adaptive format.
    pub fn parse(id: &str, locale: &'static Locale) -> Result<Self, FormatError> {
        let pattern = if id == SMART_NUMBER {
            Pattern::Smart
        } else {
            Pattern::Spec(FormatSpec::parse(id)?)
        };
        Ok(Self {
            id: id.to_string(),
            pattern,
            locale,
        })
    }

    /// The adaptive default: SI for large magnitudes, a few decimals for small ones.
    pub fn smart(locale: &'static Locale) -> Self {
        Self {
            id: SMART_NUMBER.to_string(),
            pattern: Pattern::Smart,
            locale,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn locale(&self) -> &'static Locale {
        self.locale
    }

    pub fn format(&self, value: f64) -> String {
        match &self.pattern {
            Pattern::Spec(spec) => spec.apply(value, self.locale),
            Pattern::Smart => smart_format(value, self.locale),
        }
    }
}

impl Serialize for NumberFormatter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.id)
    }
}

struct SmartSpecs {
    si: FormatSpec,
    two: FormatSpec,
    four: FormatSpec,
}

fn smart_specs() -> &'static SmartSpecs {
    static SPECS: OnceLock<SmartSpecs> = OnceLock::new();
    SPECS.get_or_init(|| SmartSpecs {
        si: FormatSpec::parse(".3~s").expect("smart si format"),
        two: FormatSpec::parse(".2~f").expect("smart fixed format"),
        four: FormatSpec::parse(".4~f").expect("smart fixed format"),
    })
}

fn smart_format(value: f64, locale: &Locale) -> String {
    let specs = smart_specs();
    let abs = value.abs();
    if value == 0.0 {
        "0".to_string()
    } else if abs >= 1000.0 {
        // billions read better than giga
        specs.si.apply(value, locale).replace('G', "B")
    } else if abs >= 1.0 {
        specs.two.apply(value, locale)
    } else if abs >= 0.001 {
        specs.four.apply(value, locale)
    } else if abs > 0.000_001 {
        format!("{}µ", specs.si.apply(value * 1_000_000.0, locale))
    } else {
        specs.si.apply(value, locale)
    }
}
